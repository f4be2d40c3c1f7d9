/// Declares a catalog identifier: a transparent integer newtype that
/// serializes as the bare number and parses from its decimal text form,
/// so it can be used directly in JSON bodies, TOML files and URL paths.
///
/// ```
/// fraud_eval::catalog_id! {
///     /// Identifier of a demo entry.
///     pub struct DemoId(u32);
/// }
///
/// let id: DemoId = "12".parse().unwrap();
/// assert_eq!(id.value(), 12);
/// assert_eq!(serde_json::to_string(&id).unwrap(), "12");
/// ```
#[macro_export]
macro_rules! catalog_id {
    ($(#[$meta:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$meta])*
        #[derive(
            Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash,
            serde::Serialize, serde::Deserialize,
        )]
        #[serde(transparent)]
        $vis struct $name($inner);

        impl $name {
            pub const fn new(value: $inner) -> Self {
                Self(value)
            }

            pub const fn value(self) -> $inner {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.0, f)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = <$inner as ::std::str::FromStr>::Err;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                s.trim().parse::<$inner>().map(Self)
            }
        }

        impl ::std::convert::From<$inner> for $name {
            fn from(value: $inner) -> Self {
                Self(value)
            }
        }

        impl ::std::convert::From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}
