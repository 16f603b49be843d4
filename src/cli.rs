use std::path::PathBuf;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Append every generated result to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Ollama model to run
    #[arg(long, default_value = "gemma3:27b")]
    pub model: String,

    /// Description files to combine into one prompt; without any,
    /// descriptions are read line by line from stdin
    pub files: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn output_flag_may_appear_between_files() {
        let cli = Cli::parse_from(["sd-prompter", "a.txt", "-o", "params.txt", "b.txt"]);
        assert_eq!(cli.output, Some(PathBuf::from("params.txt")));
        assert_eq!(cli.files, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn defaults() {
        let cli = Cli::parse_from(["sd-prompter"]);
        assert_eq!(cli.model, "gemma3:27b");
        assert!(cli.output.is_none());
        assert!(cli.files.is_empty());
    }
}
