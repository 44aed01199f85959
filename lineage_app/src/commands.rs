// Copyright 2025 the Lineage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Subcommand implementations.

use std::io::{BufRead, Write};
use std::path::Path;

use kurbo::Size;
use lineage_hierarchy::{Hierarchy, LineageNode};
use lineage_render::{SvgSurface, TreeView};
use lineage_sage::{ChatSession, GenerativeClient, Sage};
use tracing::{debug, instrument};

use crate::cli::{Cli, Commands};
use crate::config::Settings;
use crate::dataset;
use crate::detail::render_card;
use crate::error::{AppError, Result};

/// Load settings and the dataset, then run the selected command on stdin/stdout.
pub fn execute_command(cli: &Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    execute(cli, &settings, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the selected command with explicit settings and streams.
pub fn execute(
    cli: &Cli,
    settings: &Settings,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let data_path = cli.data.as_deref().or(settings.data.as_deref());
    let root = dataset::load(data_path)?;

    match &cli.command {
        Commands::Render {
            output,
            width,
            height,
        } => {
            let viewport = Size::new(
                width.unwrap_or(settings.viewport.width),
                height.unwrap_or(settings.viewport.height),
            );
            let svg = render_svg(&root, viewport)?;
            match output {
                Some(path) => write_file(path, &svg)?,
                None => out.write_all(svg.as_bytes())?,
            }
        }
        Commands::Show { name } => {
            let node = match name {
                Some(name) => dataset::find(&root, name)?,
                None => &root,
            };
            write!(out, "{}", render_card(Some(node)))?;
        }
        Commands::Ask { name, question } => {
            let node = dataset::find(&root, name)?;
            let sage = Sage::gemini(settings.sage.to_sage_config())?;
            let question = question.join(" ");
            let question = Some(question.as_str()).filter(|q| !q.trim().is_empty());
            writeln!(out, "{}", sage.explain(node, question))?;
        }
        Commands::Chat { name } => {
            let node = dataset::find(&root, name)?;
            let sage = Sage::gemini(settings.sage.to_sage_config())?;
            run_chat(&sage, node, input, out)?;
        }
        Commands::List => write_outline(&root, out)?,
        Commands::Config => writeln!(out, "{}", settings.describe())?,
    }
    out.flush()?;
    Ok(())
}

/// Lay `root` out in `viewport` and serialize one frame as SVG.
#[instrument(skip(root), fields(name = %root.name))]
pub fn render_svg(root: &LineageNode, viewport: Size) -> Result<String> {
    if !(viewport.width.is_finite() && viewport.height.is_finite())
        || viewport.width <= 0.0
        || viewport.height <= 0.0
    {
        return Err(AppError::Render {
            message: format!(
                "viewport must be positive, got {}x{}",
                viewport.width, viewport.height
            ),
        });
    }
    let mut view = TreeView::new(SvgSurface::new(viewport), viewport, |_: &LineageNode| {});
    view.set_data(root);
    view.frame();
    let nodes = view.layout().map_or(0, |l| l.len());
    debug!(nodes, "rendered");
    Ok(view.into_surface().to_svg())
}

fn write_file(path: &Path, svg: &str) -> Result<()> {
    std::fs::write(path, svg)?;
    tracing::info!(path = %path.display(), bytes = svg.len(), "wrote svg");
    Ok(())
}

/// One line per node, indented by depth.
pub fn write_outline(root: &LineageNode, out: &mut impl Write) -> Result<()> {
    for node in Hierarchy::new(root).iter() {
        for _ in 0..node.depth() {
            write!(out, "  ")?;
        }
        let data = node.data();
        match data.translation.as_deref().filter(|t| !t.is_empty()) {
            Some(t) => writeln!(out, "{} ({t})", data.name)?,
            None => writeln!(out, "{}", data.name)?,
        }
    }
    Ok(())
}

/// Interactive conversation about `node`. Ends on EOF, `/quit` or `/exit`.
pub fn run_chat<C: GenerativeClient>(
    sage: &Sage<C>,
    node: &LineageNode,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = ChatSession::new(node);
    writeln!(out, "Dharma Sage · discussing {}", node.name)?;
    if let Some(greeting) = session.messages().first() {
        writeln!(out, "{}", greeting.text)?;
    }
    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let message = line.trim();
        if matches!(message, "/quit" | "/exit") {
            break;
        }
        if let Some(reply) = session.send(sage, message) {
            writeln!(out, "{reply}")?;
        }
    }
    writeln!(out)?;
    debug!(messages = session.messages().len(), "chat ended");
    Ok(())
}
