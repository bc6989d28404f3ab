use std::{
    error::Error,
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{Parser, Subcommand};
use log::debug;
use owo_colors::OwoColorize;
use resolve_path::PathResolveExt;
use serde::Serialize;
use urlify_lib::{
    SlugBuilder, UrlifyConfig,
    charmap::{SUPPORTED_LANGUAGES, is_supported_language},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Slugify each TEXT argument, or every line of stdin when none are given.
    Slug {
        text: Vec<String>,

        #[arg(short, long)]
        language: Option<String>,

        #[arg(short, long)]
        max_length: Option<usize>,

        /// Extra word to drop, may be repeated.
        #[arg(short = 's', long = "stopword")]
        stopwords: Vec<String>,

        /// Directory holding a urlify.toml.
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        #[arg(long)]
        json: bool,
    },
    /// List the identifiers accepted by --language.
    Languages,
}

#[derive(Serialize)]
struct SlugRecord<'a> {
    input: &'a str,
    slug: &'a str,
}

// Flags win over the config file, stopwords from both apply.
fn builder_for(
    config: &UrlifyConfig,
    language: Option<String>,
    max_length: Option<usize>,
    stopwords: &[String],
) -> SlugBuilder {
    let mut builder = SlugBuilder::from_config(config);

    if let Some(language) = language {
        builder.set_language(language);
    }
    if let Some(max_length) = max_length {
        builder.set_max_length(max_length);
    }
    for word in stopwords {
        builder.add_stopword(word);
    }

    if let Some(language) = builder.language()
        && !is_supported_language(language)
    {
        eprintln!(
            "{} unknown language '{}', run `urlify languages` for the supported ones",
            "warning:".yellow().bold(),
            language
        );
    }

    builder
}

fn render(builder: &mut SlugBuilder, input: &str, json: bool) -> Result<String, serde_json::Error> {
    let slug = builder.set_text(input).transform();

    if json {
        serde_json::to_string(&SlugRecord { input, slug })
    } else {
        Ok(slug.to_string())
    }
}

/// Writes one slug per input line.
fn slugify_lines(
    builder: &mut SlugBuilder,
    input: impl BufRead,
    out: &mut impl Write,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    for line in input.lines() {
        writeln!(out, "{}", render(builder, &line?, json)?)?;
    }

    Ok(())
}

fn write_languages(out: &mut impl Write) -> io::Result<()> {
    for language in SUPPORTED_LANGUAGES {
        writeln!(out, "{}", language)?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    match args.cmd {
        Commands::Slug {
            text,
            language,
            max_length,
            stopwords,
            config,
            json,
        } => {
            let config_dir = config.resolve();
            debug!("loading configuration from {}", config_dir.display());
            let config = UrlifyConfig::new_from_path(&config_dir)?;
            debug!("using {:?}", config);
            let mut builder = builder_for(&config, language, max_length, &stopwords);

            if text.is_empty() {
                slugify_lines(&mut builder, io::stdin().lock(), &mut io::stdout().lock(), json)?;
            } else {
                for input in &text {
                    println!("{}", render(&mut builder, input, json)?);
                }
            }
        }
        Commands::Languages => write_languages(&mut io::stdout().lock())?,
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_slug_args() {
        let args = Args::try_parse_from([
            "urlify", "slug", "-l", "de", "-m", "20", "-s", "foo", "-s", "bar", "Über", "cool",
        ])
        .unwrap();

        match args.cmd {
            Commands::Slug {
                text,
                language,
                max_length,
                stopwords,
                config,
                json,
            } => {
                assert_eq!(vec!["Über", "cool"], text);
                assert_eq!(Some("de".to_string()), language);
                assert_eq!(Some(20), max_length);
                assert_eq!(vec!["foo", "bar"], stopwords);
                assert_eq!(PathBuf::from("."), config);
                assert!(!json);
            }
            Commands::Languages => panic!("expected the slug command"),
        }
    }

    #[test]
    fn test_flags_override_config() {
        let config = UrlifyConfig {
            language: Some("latin".into()),
            max_length: 4,
            stopwords: vec!["foo".into()],
        };
        let mut builder = builder_for(&config, Some("de".into()), Some(0), &["bar".to_string()]);

        assert_eq!(Some("de"), builder.language());
        assert_eq!(0, builder.max_length());
        assert_eq!(vec!["foo", "bar"], builder.stopwords());
        assert_eq!("oel-baz", render(&mut builder, "foo Öl bar baz", false).unwrap());
    }

    #[test]
    fn test_render_json() {
        let mut builder = builder_for(&UrlifyConfig::default(), None, None, &[]);

        assert_eq!(
            r#"{"input":"The Quick Fox","slug":"quick-fox"}"#,
            render(&mut builder, "The Quick Fox", true).unwrap()
        );
        assert_eq!("quick-fox", render(&mut builder, "The Quick Fox", false).unwrap());
    }

    #[test]
    fn test_slugify_lines() {
        let mut builder = builder_for(&UrlifyConfig::default(), Some("de".into()), None, &[]);
        let input = io::Cursor::new("Über cool!\n\nThe Quick Fox\n");
        let mut out = Vec::new();

        slugify_lines(&mut builder, input, &mut out, false).unwrap();

        assert_eq!("ueber-cool\n\nquick-fox\n", String::from_utf8(out).unwrap());
    }

    #[test]
    fn test_slugify_lines_json() {
        let mut builder = builder_for(&UrlifyConfig::default(), None, Some(5), &[]);
        let input = io::Cursor::new("Hello World");
        let mut out = Vec::new();

        slugify_lines(&mut builder, input, &mut out, true).unwrap();

        assert_eq!(
            "{\"input\":\"Hello World\",\"slug\":\"hello\"}\n",
            String::from_utf8(out).unwrap()
        );
    }

    #[test]
    fn test_write_languages() {
        let mut out = Vec::new();
        write_languages(&mut out).unwrap();
        let listed = String::from_utf8(out).unwrap();

        assert_eq!(SUPPORTED_LANGUAGES.to_vec(), listed.lines().collect::<Vec<_>>());
        assert!(matches!(
            Args::try_parse_from(["urlify", "languages"]).unwrap().cmd,
            Commands::Languages
        ));
    }
}
