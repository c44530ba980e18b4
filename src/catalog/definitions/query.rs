// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Query pipeline events. Core query events use ids 10100..; the
//! relational translation warnings use 20500...

use crate::catalog::category::Query;
use crate::catalog::definition::{EventDefinition, EventDescriptor};
use crate::catalog::event_id::{EventId, LogLevel};

pub static EXCEPTION_DURING_QUERY_ITERATION: EventDefinition<Query, 2> = EventDefinition::new(
    EventId::new(10100, "Query.QueryIterationFailed"),
    LogLevel::Error,
    "An exception occurred while iterating over the results of a query for context type '{0}'.\n{1}",
);

pub static COMPILING_QUERY_MODEL: EventDefinition<Query, 1> = EventDefinition::new(
    EventId::new(10101, "Query.QueryModelCompiling"),
    LogLevel::Debug,
    "Compiling query model: \n'{0}'",
);

pub static ROW_LIMITING_OPERATION_WITHOUT_ORDER_BY: EventDefinition<Query, 1> = EventDefinition::new(
    EventId::new(10102, "Query.RowLimitingOperationWithoutOrderByWarning"),
    LogLevel::Warning,
    "The query '{0}' uses a row limiting operation (Skip/Take) without OrderBy which may lead to unpredictable results.",
);

pub static FIRST_WITHOUT_ORDER_BY_AND_FILTER: EventDefinition<Query, 1> = EventDefinition::new(
    EventId::new(10103, "Query.FirstWithoutOrderByAndFilterWarning"),
    LogLevel::Warning,
    "The query '{0}' uses First/FirstOrDefault without OrderBy and filter which may lead to unpredictable results.",
);

pub static OPTIMIZED_QUERY_MODEL: EventDefinition<Query, 1> = EventDefinition::new(
    EventId::new(10104, "Query.QueryModelOptimized"),
    LogLevel::Debug,
    "Optimized query model: \n'{0}'",
);

pub static INCLUDING_NAVIGATION: EventDefinition<Query, 1> = EventDefinition::new(
    EventId::new(10105, "Query.NavigationIncluded"),
    LogLevel::Debug,
    "Including navigation: '{0}'.",
);

pub static IGNORED_INCLUDE: EventDefinition<Query, 1> = EventDefinition::new(
    EventId::new(10106, "Query.IncludeIgnoredWarning"),
    LogLevel::Warning,
    "The Include operation for navigation '{0}' is unnecessary and was ignored because the navigation is not reachable in the final query results.",
);

pub static QUERY_EXECUTION_PLANNED: EventDefinition<Query, 1> = EventDefinition::new(
    EventId::new(10107, "Query.QueryExecutionPlanned"),
    LogLevel::Debug,
    "{0}",
);

pub static POSSIBLE_UNINTENDED_COLLECTION_NAVIGATION_NULL_COMPARISON: EventDefinition<Query, 1> =
    EventDefinition::new(
        EventId::new(10108, "Query.PossibleUnintendedCollectionNavigationNullComparisonWarning"),
        LogLevel::Warning,
        "Possible unintended comparison of collection navigation '{0}' to null.",
    );

pub static POSSIBLE_UNINTENDED_REFERENCE_COMPARISON: EventDefinition<Query, 2> = EventDefinition::new(
    EventId::new(10109, "Query.PossibleUnintendedReferenceComparisonWarning"),
    LogLevel::Warning,
    "Possible unintended reference comparison between '{0}' and '{1}'.",
);

pub static CLIENT_EVALUATION: EventDefinition<Query, 1> = EventDefinition::new(
    EventId::new(20500, "Query.QueryClientEvaluationWarning"),
    LogLevel::Warning,
    "The query expression '{0}' could not be translated and will be evaluated locally.",
);

pub static POSSIBLE_UNINTENDED_USE_OF_EQUALS: EventDefinition<Query, 2> = EventDefinition::new(
    EventId::new(20501, "Query.QueryPossibleUnintendedUseOfEqualsWarning"),
    LogLevel::Warning,
    "Possible unintended use of method Equals(object) for arguments of different types: '{0}', '{1}'. This comparison will always return 'false'.",
);

pub(super) fn definitions() -> Vec<&'static dyn EventDescriptor> {
    vec![
        &EXCEPTION_DURING_QUERY_ITERATION,
        &COMPILING_QUERY_MODEL,
        &ROW_LIMITING_OPERATION_WITHOUT_ORDER_BY,
        &FIRST_WITHOUT_ORDER_BY_AND_FILTER,
        &OPTIMIZED_QUERY_MODEL,
        &INCLUDING_NAVIGATION,
        &IGNORED_INCLUDE,
        &QUERY_EXECUTION_PLANNED,
        &POSSIBLE_UNINTENDED_COLLECTION_NAVIGATION_NULL_COMPARISON,
        &POSSIBLE_UNINTENDED_REFERENCE_COMPARISON,
        &CLIENT_EVALUATION,
        &POSSIBLE_UNINTENDED_USE_OF_EQUALS,
    ]
}
