//! Headless document previewer for `lantern-ui`.
//!
//! Builds a UI tree from a JSON document, simulates a little input, and
//! reports what would be drawn — no window or GPU required. With `--watch`
//! it keeps polling the document and re-renders on every change, which makes
//! it a convenient hot-reload harness while editing UI files.
//!
//! ```text
//! lantern-studio                      # preview the built-in HUD document
//! lantern-studio path/to/doc.json     # preview a document once
//! lantern-studio --watch doc.json     # poll + re-render on change
//! lantern-studio --font body.ttf ...  # measure text with a real font
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context as _, Result};
use lantern_gfx::logging::{init_logging, LoggingConfig};
use lantern_gfx::scene::{DrawCmd, DrawList};
use lantern_ui::prelude::*;

const DEFAULT_DOC: &str = include_str!("../ui/hud.json");
const VIEWPORT: Viewport = Viewport::new(1280.0, 720.0);

struct Options {
    doc: Option<PathBuf>,
    font: Option<PathBuf>,
    watch: bool,
}

fn parse_args() -> Result<Options> {
    let mut opts = Options { doc: None, font: None, watch: false };
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--watch" => opts.watch = true,
            "--font" => {
                let path = args.next().context("--font needs a path argument")?;
                opts.font = Some(PathBuf::from(path));
            }
            other if !other.starts_with('-') => opts.doc = Some(PathBuf::from(other)),
            other => bail!("unknown argument: {other}"),
        }
    }

    if opts.watch && opts.doc.is_none() {
        bail!("--watch needs a document path to poll");
    }
    Ok(opts)
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  lantern studio — headless UI document preview");
    println!("  viewport {}x{}", VIEWPORT.width, VIEWPORT.height);
    println!();

    let opts = parse_args()?;

    let mut fonts = FontSystem::new();
    let font = match &opts.font {
        Some(path) => {
            let bytes =
                fs::read(path).with_context(|| format!("reading font {}", path.display()))?;
            fonts.load_font(&bytes, 18.0).context("loading font")?
        }
        // No font on disk: measurement falls back to coarse estimates.
        None => FontId(0),
    };

    let loader = Loader::new(build_factory(font));

    if opts.watch {
        watch_loop(opts.doc.as_deref().unwrap(), &loader, &fonts)
    } else {
        preview_once(opts.doc.as_deref(), &loader, &fonts)
    }
}

// ── resource setup ────────────────────────────────────────────────────────

fn build_factory(font: FontId) -> Factory {
    let mut shaders = HashMap::new();
    shaders.insert("ui".to_string(), ShaderId(0));

    let mut meshes = HashMap::new();
    meshes.insert("quad".to_string(), MeshId(0));

    let mut colors = HashMap::new();
    colors.insert("white".to_string(), Color::white());
    colors.insert("black".to_string(), Color::black());
    colors.insert("panel".to_string(), Color::rgba(0.08, 0.09, 0.12, 0.95));
    colors.insert("slate".to_string(), Color::rgb(0.18, 0.20, 0.26));
    colors.insert("sky".to_string(), Color::rgb(0.28, 0.46, 0.80));
    colors.insert("glow".to_string(), Color::rgb(0.95, 0.80, 0.30));

    let context = Context::new(ShaderId(0), font, MeshId(0));

    let mut actions = ActionRegistry::new();
    actions.register("spawn_agent", || log::info!("action: spawn_agent"));
    actions.register("scatter_energy", || log::info!("action: scatter_energy"));
    actions.register("toggle_pause", || log::info!("action: toggle_pause"));

    Factory::new(shaders, meshes, colors, font, context, actions)
}

// ── preview ───────────────────────────────────────────────────────────────

fn preview_once(doc: Option<&Path>, loader: &Loader, fonts: &FontSystem) -> Result<()> {
    let root = match doc {
        Some(path) => loader
            .load_from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => loader.load_from_str(DEFAULT_DOC).context("loading built-in document")?,
    };

    let mut system = System::new();
    system.add(root.clone());

    println!("tree:");
    dump_tree(&root, 1);
    println!();

    // Hover and click the first button so its action and hover visuals show
    // up in the output.
    if let Some(button) = first_button(&root) {
        let abs = button.absolute_bounds();
        let (cx, cy) = abs.center();
        let (px, py) = (cx * VIEWPORT.width, cy * VIEWPORT.height);

        system.handle_event(&UiEvent::PointerMove { x: px, y: py }, VIEWPORT);
        system.handle_event(
            &UiEvent::PointerDown { button: MouseButton::Left, x: px, y: py },
            VIEWPORT,
        );
        println!("clicked '{}' at ({px:.0}, {py:.0})", button.name());
        println!(
            "cursor over UI: {}",
            system.is_mouse_over_ui(px, py, VIEWPORT)
        );
    }

    let frame = render_frame(&system, fonts);
    println!("frame: {}", summarize(&frame));
    Ok(())
}

fn watch_loop(path: &Path, loader: &Loader, fonts: &FontSystem) -> Result<()> {
    let mut system = System::new();
    let mut watcher = Watcher::new();
    let mut target: Option<ElementRef> = None;

    println!("watching {} — edit the file to re-render, Ctrl-C to quit", path.display());

    loop {
        if watcher.reload_if_changed(path, &mut system, loader, &mut target, true) {
            if let Some(root) = &target {
                println!();
                println!("tree:");
                dump_tree(root, 1);
                let frame = render_frame(&system, fonts);
                println!("frame: {}", summarize(&frame));
            }
        }
        std::thread::sleep(Duration::from_millis(300));
    }
}

// ── reporting ─────────────────────────────────────────────────────────────

fn render_frame(system: &System, fonts: &FontSystem) -> DrawList {
    let mut list = DrawList::new();
    let mut painter = Painter::new(&mut list, fonts, VIEWPORT);
    system.render(&mut painter);
    list
}

fn summarize(list: &DrawList) -> String {
    let mut rects = 0;
    let mut texts = 0;
    let mut clipped = 0;
    for item in list.items() {
        match item.cmd {
            DrawCmd::Rect(_) => rects += 1,
            DrawCmd::Text(_) => texts += 1,
        }
        if item.clip.is_some() {
            clipped += 1;
        }
    }
    format!("{rects} rects, {texts} text runs, {clipped} clipped")
}

fn dump_tree(element: &ElementRef, depth: usize) {
    let b = element.absolute_bounds();
    println!(
        "{:indent$}{} [{}] ({:.3}, {:.3})-({:.3}, {:.3})",
        "",
        element.name(),
        element.widget_name(),
        b.min_x,
        b.min_y,
        b.max_x,
        b.max_y,
        indent = depth * 2
    );
    for child in element.children() {
        dump_tree(&child, depth + 1);
    }
}

fn first_button(element: &ElementRef) -> Option<ElementRef> {
    if element.widget_name() == "Button" {
        return Some(element.clone());
    }
    element.children().into_iter().find_map(|c| first_button(&c))
}
