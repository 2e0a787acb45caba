use anyhow::{Context, Result, bail};
use image_block_config::{Config, ExtensionMeta};
use image_block_engine::{Document, ImageAttributes, ImageNode};
use serde::Serialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

const USAGE: &str = "\
Usage:
  image-block-cli render <file> [--cdn-url URL] [--root-url URL]
  image-block-cli inspect <file> [--cdn-url URL] [--root-url URL]
  image-block-cli options";

#[derive(Debug, Default, PartialEq)]
struct Overrides {
    cdn_url: Option<String>,
    root_url: Option<String>,
}

#[derive(Debug, PartialEq)]
enum Command {
    /// Re-hydrate a document and write it back with freshly computed sources
    Render { file: PathBuf, overrides: Overrides },
    /// List the image blocks of a document
    Inspect { file: PathBuf, overrides: Overrides },
    /// Print the extension option descriptor
    Options,
}

#[derive(Serialize)]
struct InspectReport {
    image: Vec<ImageReport>,
}

#[derive(Serialize)]
struct ImageReport {
    block: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    src: Option<String>,
    attributes: ImageAttributes,
}

fn parse_args(args: &[String]) -> Result<Command> {
    let Some((command, rest)) = args.split_first() else {
        bail!("missing command\n\n{USAGE}");
    };

    if command == "options" {
        return Ok(Command::Options);
    }

    let mut file = None;
    let mut overrides = Overrides::default();
    let mut rest = rest.iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--cdn-url" => {
                overrides.cdn_url = Some(rest.next().context("--cdn-url needs a value")?.clone())
            }
            "--root-url" => {
                overrides.root_url = Some(rest.next().context("--root-url needs a value")?.clone())
            }
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n\n{USAGE}"),
            path if file.is_none() => file = Some(PathBuf::from(path)),
            extra => bail!("unexpected argument {extra}\n\n{USAGE}"),
        }
    }
    let file = file.with_context(|| format!("missing <file>\n\n{USAGE}"))?;

    match command.as_str() {
        "render" => Ok(Command::Render { file, overrides }),
        "inspect" => Ok(Command::Inspect { file, overrides }),
        other => bail!("unknown command {other}\n\n{USAGE}"),
    }
}

fn image_node(overrides: Overrides) -> Result<ImageNode> {
    let mut config = Config::load()?.unwrap_or_else(|| {
        log::info!(
            "No config at {}, using defaults",
            Config::config_path().display()
        );
        Config::default()
    });

    if let Some(root_url) = overrides.root_url {
        config.root_url = Some(root_url);
    }
    if let Some(cdn_url) = overrides.cdn_url {
        config.image.cdn_url = Some(cdn_url);
    }

    let node = config.image_node();
    log::info!("Rendering images against {}", node.options().public_url);
    Ok(node)
}

fn load_document(file: &Path, node: &ImageNode) -> Result<Document> {
    let html = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let doc = Document::from_html(&html, node);
    log::info!("Loaded {} blocks from {}", doc.len(), file.display());
    Ok(doc)
}

fn inspect(doc: &Document, node: &ImageNode) -> InspectReport {
    let image = doc
        .nodes()
        .iter()
        .enumerate()
        .filter_map(|(block, n)| {
            let attributes = n.image_attributes()?.clone();
            let src = node.render_html(&attributes).attr("src").map(str::to_owned);
            Some(ImageReport {
                block,
                src,
                attributes,
            })
        })
        .collect();
    InspectReport { image }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Render { file, overrides } => {
            let node = image_node(overrides)?;
            let doc = load_document(&file, &node)?;
            println!("{}", doc.to_html(&node));
        }
        Command::Inspect { file, overrides } => {
            let node = image_node(overrides)?;
            let doc = load_document(&file, &node)?;
            print!("{}", toml::to_string_pretty(&inspect(&doc, &node))?);
        }
        Command::Options => {
            print!("{}", toml::to_string_pretty(&ExtensionMeta::image())?);
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let result = parse_args(&args).and_then(run);

    if let Err(err) = result {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}
