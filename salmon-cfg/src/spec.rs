//  SPEC.rs
//    by Lut99
//
//  Created:
//    14 Feb 2023, 10:30:44
//  Last edited:
//    14 Feb 2023, 11:14:09
//  Auto updated?
//    Yes
//
//  Description:
//!   Defines (public) interfaces and structs for the `salmon-cfg` crate.
//

use std::fmt::{Display, Formatter, Result as FResult};
use std::str::FromStr;

use salmon_shr::debug::EnumDebug;

use crate::errors::{IdentityParseError, ProfileConfigError};


/***** LIBRARY *****/
/// Defines the client identities that participate in the salmon network.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Identity {
    /// The fisherman, who records new catches and holds them until sold.
    Fredrick,
    /// A restaurateur buying salmon off of Fredrick.
    Alice,
    /// Another restaurateur buying salmon off of Fredrick.
    Bob,
}

impl Identity {
    /// Returns the (lowercase) name of this identity as it appears in ledger records and filenames.
    #[inline]
    pub fn name(&self) -> &'static str {
        use Identity::*;
        match self {
            Fredrick => "fredrick",
            Alice    => "alice",
            Bob      => "bob",
        }
    }
}

impl EnumDebug for Identity {
    #[inline]
    fn fmt_name(&self, f: &mut Formatter<'_>) -> FResult {
        use Identity::*;
        match self {
            Fredrick => write!(f, "Fredrick"),
            Alice    => write!(f, "Alice"),
            Bob      => write!(f, "Bob"),
        }
    }
}

impl Display for Identity {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Identity {
    type Err = IdentityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fredrick" => Ok(Self::Fredrick),
            "alice"    => Ok(Self::Alice),
            "bob"      => Ok(Self::Bob),

            raw => Err(IdentityParseError::UnknownIdentity{ raw: raw.into() }),
        }
    }
}



/// Defines the four connection profiles the fabric client can be pointed at.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ProfileKind {
    /// The profile describing the network topology itself (peers, orderers, CAs).
    Network,
    /// The profile of one of the client identities.
    Client(Identity),
}

impl ProfileKind {
    /// Lists all four profiles, in registration order.
    pub const ALL: [ Self; 4 ] = [ Self::Network, Self::Client(Identity::Fredrick), Self::Client(Identity::Alice), Self::Client(Identity::Bob) ];

    /// Returns the registry key under which this profile's path is made available to the fabric client.
    #[inline]
    pub fn key(&self) -> &'static str {
        use ProfileKind::*;
        match self {
            Network                    => "network-connection-profile-path",
            Client(Identity::Fredrick) => "fredrick-connection-profile-path",
            Client(Identity::Alice)    => "alice-connection-profile-path",
            Client(Identity::Bob)      => "bob-connection-profile-path",
        }
    }

    /// Returns the fixed filename of the YAML document backing this profile.
    #[inline]
    pub fn filename(&self) -> &'static str {
        use ProfileKind::*;
        match self {
            Network                    => "network-config.yaml",
            Client(Identity::Fredrick) => "fredrick.yaml",
            Client(Identity::Alice)    => "alice.yaml",
            Client(Identity::Bob)      => "bob.yaml",
        }
    }
}

impl EnumDebug for ProfileKind {
    #[inline]
    fn fmt_name(&self, f: &mut Formatter<'_>) -> FResult {
        use ProfileKind::*;
        match self {
            Network   => write!(f, "Network"),
            Client(_) => write!(f, "Client"),
        }
    }
}

impl Display for ProfileKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        write!(f, "{}", self.key())
    }
}

impl FromStr for ProfileKind {
    type Err = ProfileConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "network-connection-profile-path"  => Ok(Self::Network),
            "fredrick-connection-profile-path" => Ok(Self::Client(Identity::Fredrick)),
            "alice-connection-profile-path"    => Ok(Self::Client(Identity::Alice)),
            "bob-connection-profile-path"      => Ok(Self::Client(Identity::Bob)),

            raw => Err(ProfileConfigError::UnknownProfileKey{ raw: raw.into() }),
        }
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;


    /// Identity names must round-trip through their string form.
    #[test]
    fn identity_names_roundtrip() {
        for identity in [ Identity::Fredrick, Identity::Alice, Identity::Bob ] {
            assert_eq!(Identity::from_str(identity.name()).unwrap(), identity);
        }
        assert!(Identity::from_str("eve").is_err());
    }

    /// Profile keys must round-trip through their registry key strings.
    #[test]
    fn profile_keys_roundtrip() {
        for kind in ProfileKind::ALL {
            assert_eq!(ProfileKind::from_str(kind.key()).unwrap(), kind);
        }
        assert!(ProfileKind::from_str("network-config.yaml").is_err());
    }
}
