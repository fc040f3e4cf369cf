//! Macros for declaring state and event vocabularies.

/// Declare a fieldless enum and implement [`State`](crate::core::State) for it.
///
/// The generated enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
/// `Debug`, `Serialize` and `Deserialize`, and each variant is named after
/// itself.
///
/// # Example
///
/// ```
/// use turnstile::state_enum;
/// use turnstile::core::State;
///
/// state_enum! {
///     pub enum FanState {
///         PowerOff,
///         FirstGear,
///         SecondGear,
///     }
/// }
///
/// assert_eq!(FanState::FirstGear.name(), "FirstGear");
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
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::__private::serde::Serialize,
            $crate::__private::serde::Deserialize
        )]
        #[serde(crate = "turnstile::__private::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Declare a fieldless enum and implement [`Event`](crate::core::Event) for it.
///
/// # Example
///
/// ```
/// use turnstile::event_enum;
/// use turnstile::core::Event;
///
/// event_enum! {
///     pub enum Button {
///         PressOff,
///         PressFirst,
///     }
/// }
///
/// assert_eq!(Button::PressOff.name(), "PressOff");
/// ```
#[macro_export]
macro_rules! event_enum {
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
        #[derive(
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            Debug,
            $crate::__private::serde::Serialize,
            $crate::__private::serde::Deserialize
        )]
        #[serde(crate = "turnstile::__private::serde")]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
