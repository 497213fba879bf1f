//! `scene-check`: load a scene file and report where every hotspot lands for
//! a set of screen sizes, without a browser.
//!
//! ```text
//! scene-check [scene.json] [WxH ...] [--drag DX,DY]
//! ```

use anyhow::{anyhow, bail, Context};
use glam::DVec2;
use panorama_core::{
    ActionError, ActionSink, InteractionContext, PointerCapabilities, PointerEvent, PointerPhase,
    Scene, SceneConfig,
};

const DEFAULT_SIZES: [(f64, f64); 3] = [(1920.0, 1080.0), (1280.0, 800.0), (390.0, 844.0)];

/// Records actions instead of performing them.
struct LogActions;

impl ActionSink for LogActions {
    fn open_url(&mut self, url: &str, new_tab: bool) -> Result<(), ActionError> {
        log::info!("[action] open {} (new_tab={})", url, new_tab);
        Ok(())
    }

    fn navigate(&mut self, path: &str) -> Result<(), ActionError> {
        log::info!("[action] navigate {}", path);
        Ok(())
    }
}

struct Args {
    scene: Option<String>,
    sizes: Vec<DVec2>,
    drag: Option<DVec2>,
}

fn parse_pair(s: &str, sep: char) -> anyhow::Result<DVec2> {
    let (a, b) = s
        .split_once(sep)
        .ok_or_else(|| anyhow!("expected two numbers separated by '{}': {}", sep, s))?;
    let a: f64 = a.trim().parse().with_context(|| format!("bad number in {}", s))?;
    let b: f64 = b.trim().parse().with_context(|| format!("bad number in {}", s))?;
    Ok(DVec2::new(a, b))
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args {
        scene: None,
        sizes: Vec::new(),
        drag: None,
    };
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        if a == "--drag" {
            let v = it.next().ok_or_else(|| anyhow!("--drag needs DX,DY"))?;
            args.drag = Some(parse_pair(&v, ',')?);
        } else if a.ends_with(".json") {
            args.scene = Some(a);
        } else if a.contains('x') {
            args.sizes.push(parse_pair(&a, 'x')?);
        } else {
            bail!("unrecognized argument: {}", a);
        }
    }
    if args.sizes.is_empty() {
        args.sizes = DEFAULT_SIZES.iter().map(|&(w, h)| DVec2::new(w, h)).collect();
    }
    Ok(args)
}

/// First point on a coarse grid that is clear of every hotspot.
fn free_point(scene: &Scene) -> Option<DVec2> {
    let screen = scene.viewport().screen;
    (1..8)
        .flat_map(|i| (1..8).map(move |j| DVec2::new(i as f64, j as f64) / 8.0 * screen))
        .find(|&p| scene.probe(p).is_none())
}

fn report(config: &SceneConfig, screen: DVec2, drag: Option<DVec2>) -> anyhow::Result<()> {
    let mut scene = Scene::new(
        config,
        screen,
        PointerCapabilities::DESKTOP,
        Box::new(LogActions),
        InteractionContext::detached(),
    )?;

    if let Some(delta) = drag {
        let start = free_point(&scene).ok_or_else(|| anyhow!("no free point to start a drag"))?;
        scene.pointer_event(PointerEvent::mouse(PointerPhase::Down, start));
        scene.pointer_event(PointerEvent::mouse(PointerPhase::Move, start + delta));
        scene.pointer_event(PointerEvent::mouse(PointerPhase::Up, start + delta));
    }
    let frame = scene.tick(0.0);
    let vp = frame.viewport;
    let (lo, hi) = vp.origin_bounds();

    println!("== {}x{} ==", vp.screen.x, vp.screen.y);
    println!(
        "cover scale {:.5}  displayed {:.1}x{:.1}",
        vp.cover_scale, vp.displayed.x, vp.displayed.y
    );
    println!(
        "origin ({:.1}, {:.1})  bounds x[{:.1}, {:.1}] y[{:.1}, {:.1}]  offset ({:.1}, {:.1})",
        vp.origin.x, vp.origin.y, lo.x, hi.x, lo.y, hi.y, vp.drag_offset.x, vp.drag_offset.y
    );
    for view in &frame.hotspots {
        let Some(obj) = scene.table().get(view.index) else {
            continue;
        };
        let c = view.placement.center;
        let on_screen = c.cmpge(DVec2::ZERO).all() && c.cmple(vp.screen).all();
        println!(
            "  {:<16} ({:>8.1}, {:>8.1})  scale {:.4}{}{}  frame {}",
            obj.id,
            c.x,
            c.y,
            view.placement.scale,
            if view.placement.fallback { " [fallback]" } else { "" },
            if on_screen { "" } else { " [off-screen]" },
            view.animation.frame
        );
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = parse_args()?;
    let config = match &args.scene {
        Some(path) => SceneConfig::load(path).with_context(|| format!("loading {}", path))?,
        None => SceneConfig::bundled()?,
    };
    let artwork = config.artwork.geometry()?;
    let warnings = config.table().validate(&artwork);
    if warnings.is_empty() {
        println!("{} hotspots, no warnings", config.hotspots.len());
    } else {
        println!("{} hotspots, {} warnings:", config.hotspots.len(), warnings.len());
        for w in &warnings {
            println!("  - {}", w);
        }
    }
    for size in &args.sizes {
        report(&config, *size, args.drag)?;
    }
    Ok(())
}
