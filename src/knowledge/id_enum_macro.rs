/// Declares a string-backed identifier enum.
///
/// Each variant maps to a wire name (used by serde and the YAML knowledge base)
/// and a display name. Unrecognised wire names deserialize into `Other` so the
/// loader can report them instead of failing inside serde.
#[macro_export]
macro_rules! define_id_enum {
    (
        $(#[$enum_meta:meta])*
        $enum_name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire_name:literal : $display_name:literal
                $( | $alias:literal )*
            ),* $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $enum_name {
            $(
                $(#[$variant_meta])*
                $variant,
            )*
            Other(String),
        }

        impl serde::Serialize for $enum_name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $enum_name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Ok(Self::from_wire(&s))
            }
        }

        impl $enum_name {
            /// Wire name, as written in YAML and JSON output.
            pub fn as_str(&self) -> &str {
                match self {
                    $(
                        Self::$variant => $wire_name,
                    )*
                    Self::Other(name) => name,
                }
            }

            pub fn name(&self) -> String {
                match self {
                    $(
                        Self::$variant => $display_name.to_string(),
                    )*
                    Self::Other(name) => name.clone(),
                }
            }

            pub fn from_wire(s: &str) -> Self {
                match s {
                    $(
                        $wire_name => Self::$variant,
                    )*
                    _ => Self::Other(s.to_string()),
                }
            }

            /// Looks up a variant by wire name, display name or alias.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(
                        $wire_name | $display_name $(| $alias)* => Some(Self::$variant),
                    )*
                    _ => None,
                }
            }

            pub fn all_variants() -> &'static [Self] {
                &[
                    $(
                        Self::$variant,
                    )*
                ]
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}
