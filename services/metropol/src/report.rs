// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Report payloads accepted by the metropol api.

use std::fmt::Display;

use serde::{Serialize, Serializer};

use crate::constants::*;

/// The kind of report requested, sent as `report_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportType {
    /// Verify an identity number against the registry.
    IdentityVerification,
    /// Delinquency status for a prospective loan.
    DelinquencyStatus,
    /// Consumer credit score.
    ConsumerScore,
    /// Full credit information report.
    CreditInfo,
}

impl ReportType {
    /// Numeric code understood by the api.
    pub fn code(self) -> u8 {
        match self {
            ReportType::IdentityVerification => 1,
            ReportType::DelinquencyStatus => 2,
            ReportType::ConsumerScore => 3,
            ReportType::CreditInfo => 8,
        }
    }

    /// Resource path serving this report.
    pub fn path(self) -> &'static str {
        match self {
            ReportType::IdentityVerification => IDENTITY_VERIFY_PATH,
            ReportType::DelinquencyStatus => DELINQUENCY_STATUS_PATH,
            ReportType::ConsumerScore => CONSUMER_SCORE_PATH,
            ReportType::CreditInfo => CREDIT_INFO_PATH,
        }
    }
}

impl Serialize for ReportType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Payload of a report request.
///
/// Fields serialize in declaration order and absent optional fields are
/// left out, e.g. `{"report_type":1,"identity_number":"123456","identity_type":"001"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRequest {
    report_type: ReportType,
    identity_number: String,
    identity_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    loan_amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_reason: Option<u8>,
}

impl ReportRequest {
    fn new(report_type: ReportType, identity_number: impl Display) -> Self {
        Self {
            report_type,
            // The api only accepts identity numbers as json strings.
            identity_number: identity_number.to_string(),
            identity_type: IDENTITY_TYPE,
            loan_amount: None,
            report_reason: None,
        }
    }

    /// Payload for an identity verification.
    pub fn identity_verification(identity_number: impl Display) -> Self {
        Self::new(ReportType::IdentityVerification, identity_number)
    }

    /// Payload for a delinquency status check on a loan of `loan_amount`.
    ///
    /// Amounts are whole currency units; fractional amounts are not accepted.
    pub fn delinquency_status(identity_number: impl Display, loan_amount: u64) -> Self {
        Self {
            loan_amount: Some(loan_amount),
            ..Self::new(ReportType::DelinquencyStatus, identity_number)
        }
    }

    /// Payload for a credit information report on a loan of `loan_amount`.
    ///
    /// Amounts are whole currency units; fractional amounts are not accepted.
    pub fn credit_info(identity_number: impl Display, loan_amount: u64) -> Self {
        Self {
            loan_amount: Some(loan_amount),
            report_reason: Some(REPORT_REASON),
            ..Self::new(ReportType::CreditInfo, identity_number)
        }
    }

    /// Payload for a consumer score.
    pub fn consumer_score(identity_number: impl Display) -> Self {
        Self::new(ReportType::ConsumerScore, identity_number)
    }

    /// Identity number as sent.
    pub fn identity_number(&self) -> &str {
        &self.identity_number
    }

    /// Resource path this payload is posted to.
    pub fn path(&self) -> &'static str {
        self.report_type.path()
    }
}
