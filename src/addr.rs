//! # Hardware Addresses
//!
//! Fixed-width link-layer address type used by the cursor API.
//!
//! `HwAddr<N>` is a plain octet array with a compile-time width, formatted
//! and parsed as colon-separated hex. The common 6-octet Ethernet case is
//! aliased as [`MacAddr`]. IPv4 and IPv6 fields use `std::net::Ipv4Addr` and
//! `std::net::Ipv6Addr` directly; only the link layer needs its own type.

use crate::error::ParseHwAddrError;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A hardware (link-layer) address of `N` octets.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HwAddr<const N: usize = 6>([u8; N]);

/// A 6-octet Ethernet MAC address.
pub type MacAddr = HwAddr<6>;

impl<const N: usize> HwAddr<N> {
    /// Width of the address in bytes.
    pub const LENGTH: usize = N;

    /// The all-ones broadcast address.
    pub const BROADCAST: Self = Self([0xFF; N]);

    /// Builds an address from its octets.
    pub const fn from_octets(octets: [u8; N]) -> Self {
        Self(octets)
    }

    /// Returns the octets of this address.
    pub const fn octets(&self) -> [u8; N] {
        self.0
    }

    /// Returns the raw byte view of this address.
    pub const fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// True if this is the all-ones broadcast address.
    pub fn is_broadcast(&self) -> bool {
        *self == Self::BROADCAST
    }

    /// True if the group bit of the first octet is set.
    pub fn is_multicast(&self) -> bool {
        self.0.first().is_some_and(|octet| octet & 0x01 != 0)
    }

    /// True if this address identifies a single interface.
    pub fn is_unicast(&self) -> bool {
        !self.is_broadcast() && !self.is_multicast()
    }
}

impl<const N: usize> Default for HwAddr<N> {
    fn default() -> Self {
        Self([0; N])
    }
}

impl<const N: usize> From<[u8; N]> for HwAddr<N> {
    fn from(octets: [u8; N]) -> Self {
        Self(octets)
    }
}

impl<const N: usize> fmt::Display for HwAddr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ":")?;
            }
            write!(f, "{octet:02x}")?;
        }
        Ok(())
    }
}

impl<const N: usize> fmt::Debug for HwAddr<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HwAddr({self})")
    }
}

impl<const N: usize> FromStr for HwAddr<N> {
    type Err = ParseHwAddrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut octets = [0u8; N];
        let mut count = 0;
        for part in s.split(':') {
            if count == N {
                return Err(ParseHwAddrError::InvalidOctetCount {
                    expected: N,
                    found: s.split(':').count(),
                });
            }
            if part.is_empty() || part.len() > 2 {
                return Err(ParseHwAddrError::InvalidOctet(part.to_string()));
            }
            octets[count] = u8::from_str_radix(part, 16)
                .map_err(|_| ParseHwAddrError::InvalidOctet(part.to_string()))?;
            count += 1;
        }
        if count != N {
            return Err(ParseHwAddrError::InvalidOctetCount {
                expected: N,
                found: count,
            });
        }
        Ok(Self(octets))
    }
}

// serde's array support stops at fixed sizes, so the impls are written out:
// text formats carry the display form, binary formats carry the raw octets.
impl<const N: usize> Serialize for HwAddr<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if serializer.is_human_readable() {
            serializer.collect_str(self)
        } else {
            serializer.serialize_bytes(&self.0)
        }
    }
}

impl<'de, const N: usize> Deserialize<'de> for HwAddr<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct OctetsVisitor<const N: usize>;

        impl<'de, const N: usize> Visitor<'de> for OctetsVisitor<N> {
            type Value = HwAddr<N>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a hardware address of {N} octets")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
                if v.len() != N {
                    return Err(E::invalid_length(v.len(), &self));
                }
                let mut octets = [0u8; N];
                octets.copy_from_slice(v);
                Ok(HwAddr(octets))
            }
        }

        if deserializer.is_human_readable() {
            deserializer.deserialize_str(OctetsVisitor)
        } else {
            deserializer.deserialize_bytes(OctetsVisitor)
        }
    }
}
