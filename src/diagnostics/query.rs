// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Query compilation and execution events.
//!
//! Warnings that quote a query inline print it on one line and cut it at
//! [`QueryModel::INLINE_CHARACTER_LIMIT`] characters; the compiling and
//! optimized notices print the full model.

use crate::catalog::definitions::query;
use crate::catalog::Query;
use crate::diagnostics::DiagnosticsLogger;
use crate::domain::{Expression, QueryModel};
use crate::errors::DiagnosticsError;
use crate::payloads::query::{
    BinaryExpressionPayload, ContextErrorPayload, ExpressionPayload, NavigationPathPayload,
    QueryModelPayload,
};
use crate::payloads::LazyMessage;
use std::error::Error;

impl DiagnosticsLogger<Query> {
    pub fn query_iteration_failed(
        &self,
        context_type: &str,
        error: &(dyn Error + 'static),
    ) -> Result<(), DiagnosticsError> {
        let definition = &query::EXCEPTION_DURING_QUERY_ITERATION;
        let render = || definition.generate_message([&context_type, &error]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, Some(error), |base| {
            ContextErrorPayload {
                base,
                context_type,
                error,
            }
            .into()
        })
    }

    pub fn query_model_compiling(&self, query_model: &QueryModel) -> Result<(), DiagnosticsError> {
        let definition = &query::COMPILING_QUERY_MODEL;
        let render = || definition.generate_message([&query_model.print(false, None)]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            QueryModelPayload { base, query_model }.into()
        })
    }

    pub fn query_model_optimized(&self, query_model: &QueryModel) -> Result<(), DiagnosticsError> {
        let definition = &query::OPTIMIZED_QUERY_MODEL;
        let render = || definition.generate_message([&query_model.print(false, None)]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            QueryModelPayload { base, query_model }.into()
        })
    }

    pub fn row_limiting_operation_without_order_by_warning(
        &self,
        query_model: &QueryModel,
    ) -> Result<(), DiagnosticsError> {
        let definition = &query::ROW_LIMITING_OPERATION_WITHOUT_ORDER_BY;
        let render = || {
            definition.generate_message([
                &query_model.print(true, Some(QueryModel::INLINE_CHARACTER_LIMIT))
            ])
        };
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            QueryModelPayload { base, query_model }.into()
        })
    }

    pub fn first_without_order_by_and_filter_warning(
        &self,
        query_model: &QueryModel,
    ) -> Result<(), DiagnosticsError> {
        let definition = &query::FIRST_WITHOUT_ORDER_BY_AND_FILTER;
        let render = || {
            definition.generate_message([
                &query_model.print(true, Some(QueryModel::INLINE_CHARACTER_LIMIT))
            ])
        };
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            QueryModelPayload { base, query_model }.into()
        })
    }

    pub fn navigation_included(&self, navigation_path: &str) -> Result<(), DiagnosticsError> {
        let definition = &query::INCLUDING_NAVIGATION;
        let render = || definition.generate_message([&navigation_path]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            NavigationPathPayload {
                base,
                navigation_path,
            }
            .into()
        })
    }

    pub fn include_ignored_warning(&self, navigation_path: &str) -> Result<(), DiagnosticsError> {
        let definition = &query::IGNORED_INCLUDE;
        let render = || definition.generate_message([&navigation_path]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            NavigationPathPayload {
                base,
                navigation_path,
            }
            .into()
        })
    }

    /// `plan` is the printed execution plan.
    pub fn query_execution_planned(&self, plan: &Expression) -> Result<(), DiagnosticsError> {
        let definition = &query::QUERY_EXECUTION_PLANNED;
        let render = || definition.generate_message([plan]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ExpressionPayload {
                base,
                expression: plan,
            }
            .into()
        })
    }

    pub fn possible_unintended_collection_navigation_null_comparison_warning(
        &self,
        navigation_path: &str,
    ) -> Result<(), DiagnosticsError> {
        let definition = &query::POSSIBLE_UNINTENDED_COLLECTION_NAVIGATION_NULL_COMPARISON;
        let render = || definition.generate_message([&navigation_path]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            NavigationPathPayload {
                base,
                navigation_path,
            }
            .into()
        })
    }

    pub fn possible_unintended_reference_comparison_warning(
        &self,
        left: &Expression,
        right: &Expression,
    ) -> Result<(), DiagnosticsError> {
        let definition = &query::POSSIBLE_UNINTENDED_REFERENCE_COMPARISON;
        let render = || definition.generate_message([left, right]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            BinaryExpressionPayload { base, left, right }.into()
        })
    }

    pub fn client_evaluation_warning(&self, expression: &Expression) -> Result<(), DiagnosticsError> {
        let definition = &query::CLIENT_EVALUATION;
        let render = || definition.generate_message([expression]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            ExpressionPayload { base, expression }.into()
        })
    }

    pub fn possible_unintended_use_of_equals_warning(
        &self,
        left: &Expression,
        right: &Expression,
    ) -> Result<(), DiagnosticsError> {
        let definition = &query::POSSIBLE_UNINTENDED_USE_OF_EQUALS;
        let render = || definition.generate_message([left, right]);
        let message = LazyMessage::new(&render);
        self.dispatch(definition, &message, None, |base| {
            BinaryExpressionPayload { base, left, right }.into()
        })
    }
}
