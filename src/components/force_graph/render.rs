use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use super::scale::viridis;
use super::state::{ForceGraphState, NODE_RADIUS};

/// Background image opacity.
const BACKGROUND_ALPHA: f64 = 0.3;

pub fn render(
	state: &ForceGraphState,
	ctx: &CanvasRenderingContext2d,
	background: Option<&HtmlImageElement>,
) {
	ctx.set_fill_style_str("#ffffff");
	ctx.fill_rect(0.0, 0.0, state.width, state.height);

	// a missing or broken asset has zero natural width
	if let Some(img) = background.filter(|img| img.complete() && img.natural_width() > 0) {
		ctx.set_global_alpha(BACKGROUND_ALPHA);
		let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
			img,
			0.0,
			0.0,
			state.width,
			state.height,
		);
		ctx.set_global_alpha(1.0);
	}

	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	draw_edges(state, ctx);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn draw_edges(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	ctx.set_line_width(2.0 / k.max(0.5));
	ctx.set_font(&format!("{}px sans-serif", 8.0 / k.max(0.5)));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	state.graph.visit_edges(|n1, n2, edge| {
		let (x1, y1, x2, y2) = (n1.x() as f64, n1.y() as f64, n2.x() as f64, n2.y() as f64);
		let weight = edge.user_data;
		let t = state.norm.map(|n| n.apply(weight)).unwrap_or_default();

		ctx.set_stroke_style_str(&viridis(t));
		ctx.begin_path();
		ctx.move_to(x1, y1);
		ctx.line_to(x2, y2);
		ctx.stroke();

		let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
		let text = format!("{weight}");
		let pad = 2.0 / k.max(0.5);
		let text_width = ctx
			.measure_text(&text)
			.map(|m| m.width())
			.unwrap_or_default();
		let text_height = 8.0 / k.max(0.5);
		ctx.set_fill_style_str("rgba(255, 255, 255, 0.85)");
		ctx.fill_rect(
			mx - text_width / 2.0 - pad,
			my - text_height / 2.0 - pad,
			text_width + 2.0 * pad,
			text_height + 2.0 * pad,
		);
		ctx.set_fill_style_str("#000000");
		let _ = ctx.fill_text(&text, mx, my);
	});
}

fn draw_nodes(state: &ForceGraphState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	ctx.set_font(&format!("{}px sans-serif", 12.0 / k.max(0.5)));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");

	state.graph.visit_nodes(|node| {
		let (x, y) = (node.x() as f64, node.y() as f64);
		let info = &node.data.user_data;

		ctx.begin_path();
		let _ = ctx.arc(x, y, NODE_RADIUS, 0.0, 2.0 * PI);
		ctx.set_fill_style_str(&info.color);
		ctx.fill();

		if state.hovered == Some(node.index()) {
			ctx.set_stroke_style_str("#333333");
			ctx.set_line_width(1.5 / k);
			ctx.stroke();
		}

		if let Some(label) = &info.label {
			ctx.set_fill_style_str("#000000");
			let _ = ctx.fill_text(label, x, y);
		}
	});
}
