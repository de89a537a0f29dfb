use anyhow::{Context, Result};
use clap::Parser;
use markdown_sitegen_config::SiteConfig;
use markdown_sitegen_engine::{copy_static, generate_pages_recursive};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "markdown-sitegen")]
#[command(about = "Build a static HTML site from a tree of Markdown files")]
struct Cli {
    /// Prefix for root-relative links and images (defaults to "/", trailing "/" added if missing)
    base_path: Option<String>,

    /// Config file (defaults to ./markdown-sitegen.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of Markdown pages
    #[arg(long)]
    content: Option<PathBuf>,

    /// Directory of static assets copied as-is
    #[arg(long = "static")]
    static_dir: Option<PathBuf>,

    /// Output directory, replaced on every build
    #[arg(long)]
    public: Option<PathBuf>,

    /// HTML template with {{ Title }} and {{ Content }} placeholders
    #[arg(long)]
    template: Option<PathBuf>,

    /// Log every skipped file and removed directory
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// CLI arguments override the config file, which overrides defaults.
    fn resolve(self, config: Option<SiteConfig>) -> SiteConfig {
        let config = config.unwrap_or_default();
        SiteConfig {
            content_dir: self.content.unwrap_or(config.content_dir),
            static_dir: self.static_dir.unwrap_or(config.static_dir),
            public_dir: self.public.unwrap_or(config.public_dir),
            template: self.template.unwrap_or(config.template),
            base_path: self.base_path.unwrap_or(config.base_path),
        }
    }
}

fn build(site: &SiteConfig) -> Result<()> {
    if site.static_dir.is_dir() {
        log::info!(
            "Copying assets from directory '{}' to directory '{}'",
            site.static_dir.display(),
            site.public_dir.display()
        );
        copy_static(&site.static_dir, &site.public_dir).with_context(|| {
            format!(
                "Failed to copy static assets from {}",
                site.static_dir.display()
            )
        })?;
    } else {
        log::info!("Directory '{}' does not exist", site.static_dir.display());
    }

    let pages = generate_pages_recursive(
        &site.content_dir,
        &site.template,
        &site.public_dir,
        &site.base_path,
    )
    .with_context(|| format!("Failed to generate pages from {}", site.content_dir.display()))?;

    log::info!(
        "Generated {} page(s) into '{}'",
        pages.len(),
        site.public_dir.display()
    );
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Some(
            SiteConfig::load_from_path(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?,
        ),
        None => SiteConfig::load()?,
    };
    if config.is_some() {
        log::info!("Loaded site config");
    }

    let site = cli.resolve(config);
    build(&site)
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    if let Err(e) = run(cli) {
        log::error!("Build failed: {e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("markdown-sitegen").chain(args.iter().copied()))
    }

    #[test]
    fn base_path_defaults_to_root() {
        let site = cli(&[]).resolve(None);
        assert_eq!(site.base_path, "/");
        assert_eq!(site.public_dir, PathBuf::from("public"));
    }

    #[test]
    fn positional_base_path() {
        let site = cli(&["/repo/"]).resolve(None);
        assert_eq!(site.base_path, "/repo/");
    }

    #[test]
    fn arguments_override_config() {
        let config = SiteConfig {
            base_path: "/from-config/".to_string(),
            content_dir: PathBuf::from("pages"),
            ..SiteConfig::default()
        };
        let site = cli(&["/from-cli/", "--public", "out"]).resolve(Some(config));
        assert_eq!(site.base_path, "/from-cli/");
        assert_eq!(site.content_dir, PathBuf::from("pages"));
        assert_eq!(site.public_dir, PathBuf::from("out"));
    }

    #[test]
    fn build_without_static_dir() {
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        fs::create_dir_all(root.join("content")).unwrap();
        fs::write(root.join("content/index.md"), "# Hello\n\nworld").unwrap();
        fs::write(root.join("template.html"), "{{ Title }}|{{ Content }}").unwrap();

        let site = SiteConfig {
            content_dir: root.join("content"),
            static_dir: root.join("static"),
            public_dir: root.join("public"),
            template: root.join("template.html"),
            base_path: "/".to_string(),
        };
        build(&site).unwrap();

        assert_eq!(
            fs::read_to_string(root.join("public/index.html")).unwrap(),
            "Hello|<div><h1>Hello</h1><p>world</p></div>"
        );
    }

    #[test]
    fn build_reports_missing_content() {
        let dir = TempDir::new().unwrap();
        let site = SiteConfig {
            content_dir: dir.path().join("missing"),
            static_dir: dir.path().join("static"),
            public_dir: dir.path().join("public"),
            template: dir.path().join("template.html"),
            base_path: "/".to_string(),
        };
        let err = build(&site).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to generate pages"));
    }
}
