use chartkit::models::Margin;
use chartkit::viz::{
    self, Element, HeuristicMeasurer, RenderConfig, Surface, TextAnchor, TextElement,
};
use std::fs;

fn legend_surface(keys: &[&str]) -> Surface {
    let colors = viz::util::palette(keys.len());
    let mut s = Surface::new(480, 320);
    viz::construct_legend(&mut s, 480.0, keys, &colors, &Margin::default(), 20.0, 10.0).unwrap();
    s
}

#[test]
fn legend_appends_one_group_per_key() {
    let s = legend_surface(&["Friends", "Family", "Coworkers", "Other"]);
    assert_eq!(s.children().len(), 4);
    for (i, child) in s.children().iter().enumerate() {
        let Element::Group(parts) = child else {
            panic!("expected a group, got {child:?}");
        };
        match parts.as_slice() {
            [Element::Rect(swatch), Element::Text(label)] => {
                assert_eq!(swatch.y, 10.0 + 40.0 + i as f64 * 40.0 - 15.0);
                assert_eq!(swatch.x, 60.0);
                assert_eq!(label.x, 20.0 + 480.0 - 40.0);
                assert_eq!(label.anchor, TextAnchor::End);
            }
            other => panic!("unexpected group contents: {other:?}"),
        }
    }
}

#[test]
fn custom_margin_shifts_layout() {
    let m = Margin {
        top: 5.0,
        left: 7.0,
        bottom: 0.0,
        right: 11.0,
    };
    let rows = viz::legend_layout(100.0, &["k"], &["black"], &m, 0.0, 0.0).unwrap();
    assert_eq!(rows[0].swatch.x, 7.0);
    assert_eq!(rows[0].swatch.y, -10.0);
    assert_eq!(rows[0].label.x, 89.0);
}

#[test]
fn wrapped_labels_border_and_legend_render_to_svg() {
    let mut s = legend_surface(&["A rather long legend label", "Short"]);
    let mut title = [TextElement::new(240.0, 20.0, "Friendships formed per calendar year")];
    viz::wrap(&mut title, 120.0, &HeuristicMeasurer);
    assert!(title[0].tspans.len() > 1);
    let [title] = title;
    s.append(Element::Text(title));
    viz::add_border(&mut s).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.svg");
    viz::render_to_file(&s, &path, &RenderConfig::default()).unwrap();
    let svg = fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Short"));
    assert!(svg.contains("Friendships"));
}

#[test]
fn single_line_when_width_is_ample() {
    let mut nodes = [TextElement::new(0.0, 0.0, "fits on one line")];
    viz::wrap(&mut nodes, 10_000.0, &HeuristicMeasurer);
    assert_eq!(nodes[0].lines(), vec!["fits on one line"]);
}
