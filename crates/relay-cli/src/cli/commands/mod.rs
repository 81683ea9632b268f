use super::args::{Cli, Command};

mod parse;
mod submit;
mod summary;

pub(crate) async fn dispatch(cli: Cli) -> anyhow::Result<i32> {
    match cli.cmd {
        Command::Submit(args) => submit::run(args).await,
        Command::Parse(args) => parse::run(args),
    }
}
