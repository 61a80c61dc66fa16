use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::template::write_template;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Template { file, force } = cmd {
        write_template(&expand_tilde(file), *force)?;
    }
    Ok(())
}
