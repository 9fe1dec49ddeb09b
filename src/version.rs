/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at http://mozilla.org/MPL/2.0/. */

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::Error;

/// The Exchange Server schema versions a request can target.
///
/// Variants are declared oldest first, so the derived ordering can be used to
/// check whether a property or an operation is available for a given version.
///
/// See <https://learn.microsoft.com/en-us/exchange/client-developer/web-service-reference/requestserverversion#version-attribute-values>
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum ExchangeVersion {
    Exchange2007_SP1,
    Exchange2010,
    Exchange2010_SP1,
    Exchange2010_SP2,
    Exchange2013,
    Exchange2013_SP1,
    Exchange2015,
    Exchange2016,
}

impl ExchangeVersion {
    /// The identifier used for this version in `RequestServerVersion`
    /// headers.
    pub const fn as_str(self) -> &'static str {
        match self {
            ExchangeVersion::Exchange2007_SP1 => "Exchange2007_SP1",
            ExchangeVersion::Exchange2010 => "Exchange2010",
            ExchangeVersion::Exchange2010_SP1 => "Exchange2010_SP1",
            ExchangeVersion::Exchange2010_SP2 => "Exchange2010_SP2",
            ExchangeVersion::Exchange2013 => "Exchange2013",
            ExchangeVersion::Exchange2013_SP1 => "Exchange2013_SP1",
            ExchangeVersion::Exchange2015 => "Exchange2015",
            ExchangeVersion::Exchange2016 => "Exchange2016",
        }
    }
}

impl fmt::Display for ExchangeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the provided string into a known version identifier.
impl TryFrom<&str> for ExchangeVersion {
    /// If the provided string could not be turned into a known version
    /// identifier, [`Error::UnknownServerVersion`] is returned.
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "Exchange2007_SP1" => Ok(ExchangeVersion::Exchange2007_SP1),
            "Exchange2010" => Ok(ExchangeVersion::Exchange2010),
            "Exchange2010_SP1" => Ok(ExchangeVersion::Exchange2010_SP1),
            "Exchange2010_SP2" => Ok(ExchangeVersion::Exchange2010_SP2),
            "Exchange2013" => Ok(ExchangeVersion::Exchange2013),
            "Exchange2013_SP1" => Ok(ExchangeVersion::Exchange2013_SP1),
            "Exchange2015" => Ok(ExchangeVersion::Exchange2015),
            "Exchange2016" => Ok(ExchangeVersion::Exchange2016),

            _ => Err(Error::UnknownServerVersion(value.to_owned())),
        }
    }
}

impl FromStr for ExchangeVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.try_into()
    }
}

impl From<ExchangeVersion> for String {
    fn from(value: ExchangeVersion) -> Self {
        value.as_str().into()
    }
}
