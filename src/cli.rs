use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Render a two-column CSV file as an interactive scatter plot."
)]
pub struct Cli {
    /// The CSV file to plot. Two numeric columns, no header row;
    /// extra columns are ignored.
    #[arg(required = true)]
    pub input_path: PathBuf,

    /// Label for the X axis.
    pub x_label: String,

    /// Label for the Y axis. Also used as the legend entry and the
    /// window title.
    pub y_label: String,

    /// Keep one row out of every STRIDE consecutive rows, starting at row 0.
    #[arg(default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
    pub stride: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_declaration_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn stride_defaults_to_one() {
        let cli = Cli::try_parse_from(["scatterview", "data.csv", "time", "value"]).unwrap();
        assert_eq!(cli.stride, 1);
    }

    #[test]
    fn stride_must_be_a_positive_integer() {
        assert!(Cli::try_parse_from(["scatterview", "data.csv", "t", "v", "0"]).is_err());
        assert!(Cli::try_parse_from(["scatterview", "data.csv", "t", "v", "2.5"]).is_err());
        assert!(Cli::try_parse_from(["scatterview", "data.csv", "t", "v", "-1"]).is_err());
    }

    #[test]
    fn all_three_labels_arguments_are_required() {
        assert!(Cli::try_parse_from(["scatterview"]).is_err());
        assert!(Cli::try_parse_from(["scatterview", "data.csv", "time"]).is_err());
    }
}
