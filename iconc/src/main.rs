use std::io::Write;

use clap::Parser;
use iconc::{compile_and_write, Args, Error};

fn main() -> Result<(), Error> {
    env_logger::builder()
        .format(|buf, record| {
            let ts = buf.timestamp_micros();
            let style = buf.default_level_style(record.level());
            writeln!(
                buf,
                "{ts}: {style}{}{style:#}: {}",
                record.level(),
                record.args()
            )
        })
        .init();

    let args = Args::parse();
    compile_and_write(&args.config())
}
