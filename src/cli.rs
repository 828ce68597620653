use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "epubpack")]
#[command(version)]
#[command(about = "Package an EPUB directory tree into an .epub container", long_about = None)]
#[command(after_help = "Examples:\n  \
  epubpack ./book                 package ./book into ./book.epub\n  \
  epubpack ./book -o out.epub     package ./book into out.epub\n  \
  epubpack -l ./book              list the files that would be packaged")]
pub struct Cli {
    /// Source directory containing the publication
    #[arg(value_name = "DIR")]
    pub source: PathBuf,

    /// Output file (default: <DIR>.epub)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// List the files that would be packaged, without writing anything
    #[arg(short = 'l')]
    pub list: bool,

    /// Quiet mode (suppress the success message)
    #[arg(short = 'q')]
    pub quiet: bool,
}

impl Cli {
    /// Resolve the output path, defaulting to the source directory's name
    /// with `.epub` appended, beside the source directory.
    pub fn output_path(&self) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => {
                let mut name = self
                    .source
                    .file_name()
                    .map(|name| name.to_os_string())
                    .unwrap_or_else(|| "package".into());
                name.push(".epub");
                self.source.with_file_name(name)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("epubpack").chain(args.iter().copied()))
    }

    #[test]
    fn test_default_output_beside_source() {
        assert_eq!(cli(&["books/demo"]).output_path(), PathBuf::from("books/demo.epub"));
    }

    #[test]
    fn test_explicit_output_wins() {
        assert_eq!(
            cli(&["books/demo", "-o", "out.epub"]).output_path(),
            PathBuf::from("out.epub")
        );
    }
}
