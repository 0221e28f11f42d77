// File: crates/plot-demo/src/main.rs
// Summary: Demo builds a figure via the facade and prints the recorded draw commands.

use anyhow::Result;
use plot_core::{MarkerStyle, RenderCommand, RenderList, SizeF};
use plot_pyplot::{ScatterOptions, Session};

fn main() -> Result<()> {
    let mut session = Session::new();
    session.figure(Some(SizeF::new(8.0, 6.0)), Some(100.0));

    let xs: Vec<f64> = (0..200).map(|i| i as f64 * 0.05).collect();
    let sin: Vec<f64> = xs.iter().map(|x| x.sin()).collect();
    let cos: Vec<f64> = xs.iter().map(|x| x.cos()).collect();

    session.plot(&xs, &sin, Some("b-"), Some("sin(x)"))?;
    session.plot(&xs, &cos, Some("r--"), Some("cos(x)"))?;

    let sparse_x: Vec<f64> = xs.iter().step_by(10).copied().collect();
    let sparse_y: Vec<f64> = sparse_x.iter().map(|x| (x * 0.7).sin() * 0.5).collect();
    session.scatter(
        &sparse_x,
        &sparse_y,
        ScatterOptions {
            marker: MarkerStyle::Diamond,
            label: Some("samples".to_string()),
            ..ScatterOptions::default()
        },
    )?;

    session.title("Trig functions");
    session.xlabel("x");
    session.ylabel("value");
    session.grid(true);
    session.legend();

    let mut list = RenderList::new();
    session.current_figure().render(&mut list)?;

    let mut polylines = 0usize;
    let mut markers = 0usize;
    let mut texts = 0usize;
    for cmd in list.commands() {
        match cmd {
            RenderCommand::Polyline { .. } => polylines += 1,
            RenderCommand::Markers { .. } => markers += 1,
            RenderCommand::Text { .. } => texts += 1,
            _ => {}
        }
    }
    println!("Recorded {} draw commands", list.len());
    println!("  polylines: {polylines}");
    println!("  marker runs: {markers}");
    println!("  text runs: {texts}");
    Ok(())
}
