//! Identifier enum generator
//!
//! Every table in this crate is a plain `u8`-backed enum with a wire
//! conversion in both directions and a list of all members.

macro_rules! identifiers {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident = $value:expr,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "defmt", derive(defmt::Format))]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[repr(u8)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant = $value,
            )+
        }

        impl $name {
            /// Every identifier in this table, in ascending wire order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Parse an identifier from its wire format byte
            pub fn from_byte(byte: u8) -> Option<Self> {
                match byte {
                    $(b if b == $name::$variant as u8 => Some($name::$variant),)+
                    _ => None,
                }
            }

            /// Convert to wire format byte
            pub fn to_byte(self) -> u8 {
                self as u8
            }
        }

        impl TryFrom<u8> for $name {
            type Error = u8;

            fn try_from(byte: u8) -> Result<Self, u8> {
                Self::from_byte(byte).ok_or(byte)
            }
        }

        impl From<$name> for u8 {
            fn from(id: $name) -> u8 {
                id.to_byte()
            }
        }
    };
}
