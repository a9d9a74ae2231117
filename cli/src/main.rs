//! wordparser CLI - Word document extraction tool
//!
//! A command-line tool for reading text, tables, metadata and images out of
//! DOCX files.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use wordparser::{DocumentReader, ImageSelector, JsonFormat};

/// Text, tables, metadata and images from Word documents
#[derive(Parser)]
#[command(
    name = "wordparser",
    version,
    about = "Extract content from Word documents",
    long_about = "wordparser - read paragraph text, tables, core properties and \
                  embedded images out of .docx files."
)]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the archive members
    Files {
        /// Input file path
        input: PathBuf,
    },

    /// Print the paragraph text
    Text {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the tables as JSON
    Tables {
        /// Input file path
        input: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// Print the core properties as JSON
    #[command(visible_alias = "properties")]
    Props {
        /// Input file path
        input: PathBuf,

        /// Output compact JSON (no indentation)
        #[arg(long)]
        compact: bool,
    },

    /// List the embedded images
    Images {
        /// Input file path
        input: PathBuf,
    },

    /// Write one image to a file (falls back to the first image)
    Image {
        /// Input file path
        input: PathBuf,

        /// Exact member name, e.g. word/media/image1.png
        #[arg(long)]
        name: Option<String>,

        /// Zero-based position in the image list
        #[arg(long)]
        index: Option<usize>,

        /// Output file path (default: the image's file name)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write every image into a directory
    Extract {
        /// Input file path
        input: PathBuf,

        /// Output directory for images
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Show document information and metadata
    Info {
        /// Input file path
        input: PathBuf,

        /// Output JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .target(env_logger::Target::Stderr)
        .init();

    if let Err(e) = run(cli.command) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Files { input } => {
            let reader = DocumentReader::open(&input)?;
            let listing = reader.list_files().join("\n");
            write_output(None, &listing)?;
        }

        Commands::Text { input, output } => {
            let text = DocumentReader::open(&input)?.get_text()?;
            write_output(output.as_deref(), &text)?;
            report_written(output.as_deref(), "Text");
        }

        Commands::Tables {
            input,
            output,
            compact,
        } => {
            let tables = DocumentReader::open(&input)?.get_tables()?;
            let json = wordparser::to_json(&tables, json_format(compact))?;
            write_output(output.as_deref(), &json)?;
            report_written(output.as_deref(), "Tables");
        }

        Commands::Props { input, compact } => {
            let props = DocumentReader::open(&input)?.get_core_properties()?;
            let json = wordparser::to_json(&props, json_format(compact))?;
            write_output(None, &json)?;
        }

        Commands::Images { input } => {
            let images = media_files(&DocumentReader::open(&input)?);
            if images.is_empty() {
                println!("{} No images found in document", "!".yellow().bold());
            } else {
                write_output(None, &images.join("\n"))?;
            }
        }

        Commands::Image {
            input,
            name,
            index,
            output,
        } => {
            let reader = DocumentReader::open(&input)?;
            let selector = ImageSelector {
                name: name.as_deref(),
                index,
            };
            let images = media_files(&reader);
            let chosen = selector
                .resolve(&images)
                .ok_or(wordparser::Error::NoImages)?
                .to_string();
            let data = reader.read_image(Some(ImageSelector::by_name(&chosen)))?;

            let target = output.unwrap_or_else(|| PathBuf::from(file_name(&chosen)));
            fs::write(&target, &data)?;
            println!(
                "{} Wrote {} ({} bytes) to {}",
                "✓".green().bold(),
                chosen,
                data.len(),
                target.display()
            );
        }

        Commands::Extract { input, output } => {
            let reader = DocumentReader::open(&input)?;
            let images = media_files(&reader);
            if images.is_empty() {
                println!("{} No images found in document", "!".yellow().bold());
                return Ok(());
            }

            fs::create_dir_all(&output)?;
            let pb = create_progress(images.len() as u64);
            for name in &images {
                pb.set_message(file_name(name).to_string());
                let data = reader.read_image(Some(ImageSelector::by_name(name)))?;
                fs::write(output.join(file_name(name)), data)?;
                pb.inc(1);
            }
            pb.finish_and_clear();

            println!(
                "{} Extracted {} images to {}",
                "✓".green().bold(),
                images.len(),
                output.display()
            );
        }

        Commands::Info { input, json } => {
            let summary = DocumentReader::open(&input)?.summary()?;

            if json {
                write_output(None, &wordparser::to_json(&summary, JsonFormat::Pretty)?)?;
                return Ok(());
            }

            println!("{}", "Document Information".cyan().bold());
            println!("{}", "─".repeat(40));
            println!(
                "{}: {}",
                "File".bold(),
                input.file_name().unwrap_or_default().to_string_lossy()
            );
            if let Some(ref title) = summary.title {
                println!("{}: {}", "Title".bold(), title);
            }
            if let Some(ref creator) = summary.creator {
                println!("{}: {}", "Author".bold(), creator);
            }
            println!("{}: {}", "Members".bold(), summary.members);
            println!("{}: {}", "Images".bold(), summary.images);

            println!("\n{}", "Content Statistics".cyan().bold());
            println!("{}", "─".repeat(40));
            println!("{}: {}", "Paragraphs".bold(), summary.paragraphs);
            println!("{}: {}", "Tables".bold(), summary.tables);
            println!("{}: {}", "Words".bold(), summary.words);
        }

        Commands::Version => {
            print_version();
        }
    }

    Ok(())
}

fn json_format(compact: bool) -> JsonFormat {
    if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    }
}

fn file_name(member: &str) -> &str {
    member.rsplit('/').next().unwrap_or(member)
}

/// Media members that can be written out as files. Directory entries
/// (`word/media/`) are listed by the archive but have no file name.
fn media_files<R: std::io::Read + std::io::Seek>(reader: &DocumentReader<R>) -> Vec<String> {
    reader
        .list_images()
        .into_iter()
        .filter(|name| !file_name(name).is_empty())
        .collect()
}

fn print_version() {
    println!("{} {}", "wordparser".green().bold(), env!("CARGO_PKG_VERSION"));
    println!("Text, tables, metadata and images from Word documents");
    println!();
    println!("Supported formats: DOCX");
}

fn create_progress(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::default_bar().template("{bar:30.blue} {pos}/{len} {msg}") {
        pb.set_style(style);
    }
    pb
}

fn report_written(path: Option<&Path>, what: &str) {
    if let Some(path) = path {
        println!("{} {} written to {}", "✓".green().bold(), what, path.display());
    }
}

fn write_output(path: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            fs::write(p, content)?;
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{}", content)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_image_args() {
        let cli = Cli::try_parse_from([
            "wordparser",
            "image",
            "doc.docx",
            "--name",
            "word/media/image1.png",
            "--index",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Image { name, index, .. } => {
                assert_eq!(name.as_deref(), Some("word/media/image1.png"));
                assert_eq!(index, Some(2));
            }
            _ => panic!("expected image command"),
        }
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("word/media/image1.png"), "image1.png");
        assert_eq!(file_name("plain.bin"), "plain.bin");
        assert_eq!(file_name("word/media/"), "");
    }

    fn docx_with_media_directory(dir: &Path) -> PathBuf {
        use zip::write::SimpleFileOptions;

        let path = dir.join("media.docx");
        let mut zip = zip::ZipWriter::new(fs::File::create(&path).unwrap());
        let options = SimpleFileOptions::default();
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"/>"#)
            .unwrap();
        zip.add_directory("word/media/", options).unwrap();
        zip.start_file("word/media/image1.png", options).unwrap();
        zip.write_all(b"first").unwrap();
        zip.start_file("word/media/image2.png", options).unwrap();
        zip.write_all(b"second").unwrap();
        zip.finish().unwrap();
        path
    }

    #[test]
    fn test_media_directory_entry_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let input = docx_with_media_directory(dir.path());

        let reader = DocumentReader::open(&input).unwrap();
        assert_eq!(
            media_files(&reader),
            vec!["word/media/image1.png", "word/media/image2.png"]
        );
        drop(reader);

        let output = dir.path().join("out");
        run(Commands::Extract {
            input: input.clone(),
            output: output.clone(),
        })
        .unwrap();
        let mut written: Vec<_> = fs::read_dir(&output)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        written.sort();
        assert_eq!(written, vec!["image1.png", "image2.png"]);
        assert_eq!(fs::read(output.join("image2.png")).unwrap(), b"second");

        let single = dir.path().join("single.png");
        run(Commands::Image {
            input,
            name: None,
            index: None,
            output: Some(single.clone()),
        })
        .unwrap();
        assert_eq!(fs::read(&single).unwrap(), b"first");
    }
}
