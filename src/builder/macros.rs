//! Macros for declaring state and trigger enums.

/// Declare a field-less enum usable as a state or trigger type.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash` and `Debug`,
/// gets a `name()` accessor and an `ALL` list of variants, and implements
/// `Display` by printing the variant name.
///
/// # Example
///
/// ```
/// use stateful::state_enum;
///
/// state_enum! {
///     pub enum CallState {
///         OffHook,
///         Ringing,
///         Connected,
///     }
/// }
///
/// assert_eq!(CallState::Ringing.name(), "Ringing");
/// assert_eq!(CallState::Connected.to_string(), "Connected");
/// assert_eq!(CallState::ALL.len(), 3);
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [$name] = &[$(Self::$variant),*];

            /// The variant name.
            #[allow(dead_code)]
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
