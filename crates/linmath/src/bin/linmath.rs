use anyhow::Result;

#[cfg(feature = "cli")]
mod main {
    use super::*;
    use clap::{Parser, Subcommand, ValueEnum};
    use linmath::{
        Aligned, Matrix2, Matrix3, Matrix4, Packed, Scalar, Vector1, Vector2, Vector3, Vector4,
    };
    use std::{
        any::type_name,
        mem::{align_of, size_of},
    };

    #[derive(Debug, Parser)]
    #[command(about = "Diagnostics for the linmath library", long_about = None)]
    struct Cli {
        #[command(subcommand)]
        command: Command,
    }

    #[derive(Debug, Subcommand)]
    enum Command {
        /// Print the size and alignment of every vector and matrix type
        Layout {
            /// Scalar type to print the layouts for
            #[arg(short, long, value_enum, default_value_t = ScalarType::F32)]
            scalar: ScalarType,
        },
        #[cfg(feature = "benchmark")]
        /// Run a benchmarking target
        Benchmark {
            /// Benchmarking target to run
            #[arg(short, long, value_enum)]
            target: linmath::benchmark::Target,

            /// Number of seconds to run the target for (it will always be run at least
            /// once)
            #[arg(short, long, default_value_t = 0.0)]
            duration: f64,

            /// Minimum number of seconds from the program is started until the target
            /// is run
            #[arg(long, default_value_t = 0.0)]
            delay: f64,
        },
        #[cfg(not(feature = "benchmark"))]
        /// Run a benchmarking target (requires the `benchmark` feature)
        Benchmark,
    }

    #[derive(Clone, Copy, Debug, ValueEnum)]
    enum ScalarType {
        I8,
        I16,
        I32,
        I64,
        U8,
        U16,
        U32,
        U64,
        F32,
        F64,
    }

    pub fn main() -> Result<()> {
        env_logger::init();

        let cli = Cli::parse();

        match cli.command {
            Command::Layout { scalar } => {
                print_layouts_for(scalar);
                Ok(())
            }
            #[cfg(feature = "benchmark")]
            Command::Benchmark {
                target,
                duration,
                delay,
            } => {
                if duration < 0.0 || delay < 0.0 {
                    anyhow::bail!("Duration and delay must be non-negative");
                }
                linmath::benchmark::benchmark(target, duration, delay);
                Ok(())
            }
            #[cfg(not(feature = "benchmark"))]
            Command::Benchmark => {
                anyhow::bail!(
                    "The `benchmark` subcommand requires the `benchmark` feature to be enabled."
                )
            }
        }
    }

    fn print_layouts_for(scalar: ScalarType) {
        match scalar {
            ScalarType::I8 => print_layouts::<i8>(),
            ScalarType::I16 => print_layouts::<i16>(),
            ScalarType::I32 => print_layouts::<i32>(),
            ScalarType::I64 => print_layouts::<i64>(),
            ScalarType::U8 => print_layouts::<u8>(),
            ScalarType::U16 => print_layouts::<u16>(),
            ScalarType::U32 => print_layouts::<u32>(),
            ScalarType::U64 => print_layouts::<u64>(),
            ScalarType::F32 => print_layouts::<f32>(),
            ScalarType::F64 => print_layouts::<f64>(),
        }
    }

    fn print_layouts<T: Scalar>() {
        log::debug!("Printing layouts for {}", type_name::<T>());
        println!("{:<10} {:>8} {:>6} {:>8} {:>6}", "type", "packed", "align", "aligned", "align");
        print_row::<Vector1<T, Packed>, Vector1<T, Aligned>>("Vector1");
        print_row::<Vector2<T, Packed>, Vector2<T, Aligned>>("Vector2");
        print_row::<Vector3<T, Packed>, Vector3<T, Aligned>>("Vector3");
        print_row::<Vector4<T, Packed>, Vector4<T, Aligned>>("Vector4");
        print_row::<Matrix2<T, Packed>, Matrix2<T, Aligned>>("Matrix2");
        print_row::<Matrix3<T, Packed>, Matrix3<T, Aligned>>("Matrix3");
        print_row::<Matrix4<T, Packed>, Matrix4<T, Aligned>>("Matrix4");
    }

    fn print_row<A, B>(name: &str) {
        println!(
            "{:<10} {:>8} {:>6} {:>8} {:>6}",
            name,
            size_of::<A>(),
            align_of::<A>(),
            size_of::<B>(),
            align_of::<B>()
        );
    }
}

#[cfg(not(feature = "cli"))]
mod main {
    use super::*;

    pub fn main() -> Result<()> {
        anyhow::bail!("This binary requires the `cli` feature to be enabled.")
    }
}

fn main() -> Result<()> {
    main::main()
}
