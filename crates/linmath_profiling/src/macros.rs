//! Macros for declaring benchmark targets.

/// Defines an enum with one variant per benchmark function, where each
/// function lives in a submodule of the given benchmarks module. The variant
/// names are the camel-cased concatenation of module and function name, and
/// `execute` dispatches to the corresponding function.
#[macro_export]
macro_rules! define_target_enum {
(
    $name:ident,
    $benchmarks_mod:path,
    $(
        $module:ident => {
            $($func:ident),* $(,)?
        }
    ),* $(,)?
) => {
    $crate::pastey::paste! {
        #[allow(clippy::enum_variant_names)]
        #[cfg_attr(feature = "cli", derive(::clap::ValueEnum))]
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
        pub enum $name {
            $(
                $( [<$module:camel $func:camel>] ),*
            ),*
        }

        impl $name {
            /// All targets, in declaration order.
            pub const ALL: &'static [Self] = &[
                $(
                    $( Self::[<$module:camel $func:camel>], )*
                )*
            ];

            fn execute(&self, benchmarker: impl $crate::benchmark::Benchmarker) {
                match self {
                    $(
                        $( Self::[<$module:camel $func:camel>] => $benchmarks_mod::$module::$func(benchmarker), )*
                    )*
                }
            }
        }
    }};
}
