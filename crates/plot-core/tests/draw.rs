// File: crates/plot-core/tests/draw.rs
// Purpose: Validate the draw pass against the command-recording renderer.

use plot_core::{
    Artist, Color, Figure, Line2D, LineStyle, MarkerStyle, RectF, RenderCommand, RenderList,
};

fn line(x: Vec<f64>, y: Vec<f64>) -> Line2D {
    Line2D::new(x, y).expect("valid data")
}

fn polyline_colors(list: &RenderList) -> Vec<Color> {
    list.commands()
        .iter()
        .filter_map(|cmd| match cmd {
            RenderCommand::Polyline { stroke, .. } => Some(stroke.color),
            _ => None,
        })
        .collect()
}

#[test]
fn invisible_figure_draws_nothing() {
    let mut fig = Figure::new();
    fig.add_axes(RectF::full()).add_line(line(vec![0.0, 1.0], vec![0.0, 1.0]));
    fig.set_visible(false);

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");
    assert!(list.is_empty());
}

#[test]
fn background_clear_comes_first() {
    let mut fig = Figure::new();
    fig.background = Color::BLACK;
    fig.add_axes(RectF::full());

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");
    assert_eq!(list.commands().first(), Some(&RenderCommand::Clear(Color::BLACK)));
}

#[test]
fn translucent_background_is_recorded_as_given() {
    let mut fig = Figure::new();
    fig.background = Color::from_argb(128, 10, 20, 30);
    fig.add_axes(RectF::full());

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");
    match list.commands().first() {
        Some(RenderCommand::Clear(color)) => {
            assert_eq!(color.a, 128);
            assert_eq!((color.r, color.g, color.b), (10, 20, 30));
        }
        other => panic!("expected a clear command, got {other:?}"),
    }
}

#[test]
fn invisible_axes_are_skipped() {
    let mut fig = Figure::new();
    let axes = fig.add_axes(RectF::full());
    axes.add_line(line(vec![0.0, 1.0], vec![0.0, 1.0]));
    axes.set_visible(false);

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");
    // Only the background clear survives.
    assert_eq!(list.len(), 1);
}

#[test]
fn zorder_governs_line_stacking() {
    let mut fig = Figure::new();
    let axes = fig.add_axes(RectF::full());

    let mut top = line(vec![0.0, 1.0], vec![0.0, 1.0]);
    top.color = Color::RED;
    top.set_zorder(5);
    axes.add_line(top);

    let mut bottom = line(vec![0.0, 1.0], vec![1.0, 0.0]);
    bottom.color = Color::GREEN;
    bottom.set_zorder(1);
    axes.add_line(bottom);

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");

    let colors: Vec<Color> = polyline_colors(&list)
        .into_iter()
        .filter(|c| *c == Color::RED || *c == Color::GREEN)
        .collect();
    // Lower zorder draws first even though it was inserted second.
    assert_eq!(colors, vec![Color::GREEN, Color::RED]);
}

#[test]
fn zorder_ties_keep_insertion_order() {
    let mut fig = Figure::new();
    let axes = fig.add_axes(RectF::full());

    let mut first = line(vec![0.0, 1.0], vec![0.0, 1.0]);
    first.color = Color::RED;
    axes.add_line(first);
    let mut second = line(vec![0.0, 1.0], vec![1.0, 0.0]);
    second.color = Color::GREEN;
    axes.add_line(second);

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");

    let colors: Vec<Color> = polyline_colors(&list)
        .into_iter()
        .filter(|c| *c == Color::RED || *c == Color::GREEN)
        .collect();
    assert_eq!(colors, vec![Color::RED, Color::GREEN]);
}

#[test]
fn zorder_governs_axes_stacking() {
    let mut fig = Figure::new();

    let top = fig.add_axes(RectF::full());
    top.set_zorder(5);
    let mut l = line(vec![0.0, 1.0], vec![0.0, 1.0]);
    l.color = Color::RED;
    top.add_line(l);

    let bottom = fig.add_axes(RectF::full());
    bottom.set_zorder(1);
    let mut l = line(vec![0.0, 1.0], vec![1.0, 0.0]);
    l.color = Color::GREEN;
    bottom.add_line(l);

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");

    let colors: Vec<Color> = polyline_colors(&list)
        .into_iter()
        .filter(|c| *c == Color::RED || *c == Color::GREEN)
        .collect();
    // The low-zorder axes draws first even though it was inserted second.
    assert_eq!(colors, vec![Color::GREEN, Color::RED]);
    // Storage still reflects insertion order.
    assert_eq!(fig.axes()[0].zorder(), 5);
    assert_eq!(fig.axes()[1].zorder(), 1);
}

#[test]
fn axes_zorder_ties_keep_insertion_order() {
    let mut fig = Figure::new();

    let mut l = line(vec![0.0, 1.0], vec![0.0, 1.0]);
    l.color = Color::RED;
    fig.add_axes(RectF::full()).add_line(l);

    let mut l = line(vec![0.0, 1.0], vec![1.0, 0.0]);
    l.color = Color::GREEN;
    fig.add_axes(RectF::full()).add_line(l);

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");

    let colors: Vec<Color> = polyline_colors(&list)
        .into_iter()
        .filter(|c| *c == Color::RED || *c == Color::GREEN)
        .collect();
    assert_eq!(colors, vec![Color::RED, Color::GREEN]);
}

#[test]
fn style_none_suppresses_the_stroke_but_not_markers() {
    let mut fig = Figure::new();
    let axes = fig.add_axes(RectF::full());
    let mut l = line(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.5]);
    l.color = Color::MAGENTA;
    l.line_style = LineStyle::None;
    l.marker = MarkerStyle::Circle;
    axes.add_line(l);

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");

    assert!(!polyline_colors(&list).contains(&Color::MAGENTA));
    let markers = list
        .commands()
        .iter()
        .find_map(|cmd| match cmd {
            RenderCommand::Markers { points, marker, .. } => Some((points.len(), *marker)),
            _ => None,
        })
        .expect("marker run recorded");
    assert_eq!(markers, (3, MarkerStyle::Circle));
}

#[test]
fn dashed_style_carries_a_dash_pattern() {
    let mut fig = Figure::new();
    let axes = fig.add_axes(RectF::full());
    let mut l = line(vec![0.0, 1.0], vec![0.0, 1.0]);
    l.color = Color::CYAN;
    l.line_style = LineStyle::Dashed;
    axes.add_line(l);

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");

    let dash = list
        .commands()
        .iter()
        .find_map(|cmd| match cmd {
            RenderCommand::Polyline { stroke, .. } if stroke.color == Color::CYAN => {
                Some(stroke.dash.clone())
            }
            _ => None,
        })
        .expect("stroked polyline recorded");
    assert!(dash.is_some());
}

#[test]
fn single_point_line_draws_without_panicking() {
    let mut fig = Figure::new();
    let axes = fig.add_axes(RectF::full());
    let mut l = line(vec![2.5], vec![2.5]);
    l.marker = MarkerStyle::Plus;
    axes.add_line(l);

    let mut list = RenderList::new();
    fig.render(&mut list).expect("degenerate extent still draws");
    assert!(!list.is_empty());
}

#[test]
fn grid_and_labels_emit_primitives() {
    let mut fig = Figure::new();
    let axes = fig.add_axes(RectF::full());
    axes.grid = true;
    axes.title = Some("t".to_string());
    axes.xlabel = Some("x".to_string());
    axes.ylabel = Some("y".to_string());

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");

    let texts = list
        .commands()
        .iter()
        .filter(|cmd| matches!(cmd, RenderCommand::Text { .. }))
        .count();
    assert_eq!(texts, 3);
    // 10 vertical + 6 horizontal grid lines + the frame.
    let polylines = list
        .commands()
        .iter()
        .filter(|cmd| matches!(cmd, RenderCommand::Polyline { .. }))
        .count();
    assert_eq!(polylines, 17);
}

#[test]
fn legend_lists_labeled_lines_only() {
    let mut fig = Figure::new();
    let axes = fig.add_axes(RectF::full());
    axes.legend = true;
    let mut labeled = line(vec![0.0, 1.0], vec![0.0, 1.0]);
    labeled.set_label("series a");
    axes.add_line(labeled);
    axes.add_line(line(vec![0.0, 1.0], vec![1.0, 0.0]));

    let mut list = RenderList::new();
    fig.render(&mut list).expect("draw");

    let entries: Vec<&str> = list
        .commands()
        .iter()
        .filter_map(|cmd| match cmd {
            RenderCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(entries, vec!["series a"]);
}
