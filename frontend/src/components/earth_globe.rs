use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use gloo_render::AnimationFrame;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, PointerEvent};
use yew::prelude::*;

use crate::motion::globe::{
    land_points, project, GlobeMotion, PointerDrag, Scatter, ATMOSPHERE_LAYER, CLOUD_LAYER,
    EARTH_RADIUS, LIGHTING, STAR_COUNT, TINT_LAYER,
};
use crate::motion::tick::{BrowserFrames, FrameScheduler};

/// Share of the shorter canvas side covered by the globe's radius.
const RADIUS_FRACTION: f64 = 0.4;
const LAND_STEP_DEG: f64 = 2.5;
const CLOUD_COUNT: usize = 90;
const LAND_CHANNELS: &str = "96, 196, 150";
const STAR_CHANNELS: &str = "255, 255, 255";

struct Star {
    x: f64,
    y: f64,
    size: f64,
    phase: f64,
}

struct Cloud {
    lat: f64,
    lon: f64,
    size: f64,
}

struct GlobeScene {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    motion: Rc<RefCell<GlobeMotion>>,
    stars: Vec<Star>,
    clouds: Vec<Cloud>,
    land: Vec<(f64, f64)>,
    land_fill: String,
    cloud_fill: String,
    star_fill: String,
    on_ready: Option<Callback<()>>,
}

impl GlobeScene {
    fn new(
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        motion: Rc<RefCell<GlobeMotion>>,
        on_ready: Callback<()>,
    ) -> Self {
        let mut scatter = Scatter::new(0x5EED);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: scatter.next_unit(),
                y: scatter.next_unit(),
                size: 0.4 + scatter.next_unit() * 1.1,
                phase: scatter.next_unit() * TAU,
            })
            .collect();
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud {
                lat: scatter.next_unit() * 120.0 - 60.0,
                lon: scatter.next_unit() * 360.0 - 180.0,
                size: 0.04 + scatter.next_unit() * 0.08,
            })
            .collect();

        Self {
            canvas,
            ctx,
            motion,
            stars,
            clouds,
            land: land_points(LAND_STEP_DEG),
            land_fill: rgb(LAND_CHANNELS),
            cloud_fill: rgb(CLOUD_LAYER.color),
            star_fill: rgb(STAR_CHANNELS),
            on_ready: Some(on_ready),
        }
    }

    /// Match the backing store to the element's CSS size; returns that size.
    fn fit_canvas(&self) -> Result<(f64, f64), JsValue> {
        let ratio = web_sys::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0).max(1.0);
        let width = f64::from(self.canvas.client_width().max(1));
        let height = f64::from(self.canvas.client_height().max(1));
        let backing_width = (width * ratio).round() as u32;
        let backing_height = (height * ratio).round() as u32;
        if self.canvas.width() != backing_width || self.canvas.height() != backing_height {
            self.canvas.set_width(backing_width);
            self.canvas.set_height(backing_height);
        }
        self.ctx.set_transform(ratio, 0.0, 0.0, ratio, 0.0, 0.0)?;
        Ok((width, height))
    }

    fn paint(&mut self, timestamp: f64) -> Result<(), JsValue> {
        let (width, height) = self.fit_canvas()?;
        let motion = {
            let mut motion = self.motion.borrow_mut();
            motion.advance(timestamp);
            motion.clone()
        };

        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, width, height);

        self.paint_stars(width, height, motion.elapsed);

        let cx = width / 2.0;
        let cy = height / 2.0;
        let radius = width.min(height) * RADIUS_FRACTION;
        let unit = radius / EARTH_RADIUS;
        let tilt = motion.tilt();

        // Atmosphere halo behind everything else.
        let halo = ctx.create_radial_gradient(cx, cy, radius, cx, cy, ATMOSPHERE_LAYER.radius * unit * 1.12)?;
        halo.add_color_stop(0.0, &rgba(ATMOSPHERE_LAYER.color, ATMOSPHERE_LAYER.opacity))?;
        halo.add_color_stop(1.0, &rgba(ATMOSPHERE_LAYER.color, 0.0))?;
        ctx.set_fill_style_canvas_gradient(&halo);
        disc(ctx, cx, cy, ATMOSPHERE_LAYER.radius * unit * 1.12)?;

        // Ocean, lit from the sun's side.
        let (sun_x, sun_y, _) = sun_direction();
        let ocean = ctx.create_radial_gradient(
            cx + sun_x * radius * 0.45,
            cy + sun_y * radius * 0.45,
            radius * 0.1,
            cx,
            cy,
            radius,
        )?;
        ocean.add_color_stop(0.0, "#1f6f9c")?;
        ocean.add_color_stop(0.6, "#0c3a5c")?;
        ocean.add_color_stop(1.0, "#031525")?;
        ctx.set_fill_style_canvas_gradient(&ocean);
        disc(ctx, cx, cy, radius)?;

        // Dot layers share one fill colour; per-dot fade goes through
        // global alpha.
        let yaw = motion.surface_yaw();
        ctx.set_fill_style_str(&self.land_fill);
        for &(lat, lon) in &self.land {
            let (x, y, depth) = project(lat, lon, yaw, tilt);
            if depth <= 0.0 {
                continue;
            }
            ctx.set_global_alpha(land_alpha(x, y, depth));
            disc(ctx, cx + x * radius, cy + y * radius, 1.1 + depth * 0.6)?;
        }

        let cloud_yaw = motion.cloud_surface_yaw();
        let cloud_radius = CLOUD_LAYER.radius * unit;
        ctx.set_fill_style_str(&self.cloud_fill);
        for cloud in &self.clouds {
            let (x, y, depth) = project(cloud.lat, cloud.lon, cloud_yaw, tilt);
            if depth <= 0.0 {
                continue;
            }
            ctx.set_global_alpha(cloud_alpha(depth));
            disc(ctx, cx + x * cloud_radius, cy + y * cloud_radius, cloud.size * radius * depth)?;
        }
        ctx.set_global_alpha(1.0);

        ctx.set_fill_style_str(&rgba(TINT_LAYER.color, TINT_LAYER.opacity));
        disc(ctx, cx, cy, TINT_LAYER.radius * unit)?;

        // Night side falls off away from the sun.
        let shade = ctx.create_linear_gradient(
            cx + sun_x * radius,
            cy + sun_y * radius,
            cx - sun_x * radius,
            cy - sun_y * radius,
        );
        shade.add_color_stop(0.0, "rgba(0, 0, 0, 0)")?;
        shade.add_color_stop(1.0, &format!("rgba(0, 0, 0, {:.3})", 1.0 - LIGHTING.ambient * 2.0))?;
        ctx.set_fill_style_canvas_gradient(&shade);
        disc(ctx, cx, cy, radius * 1.005)?;

        if let Some(on_ready) = self.on_ready.take() {
            on_ready.emit(());
        }
        Ok(())
    }

    fn paint_stars(&self, width: f64, height: f64, elapsed: f64) {
        self.ctx.set_fill_style_str(&self.star_fill);
        for star in &self.stars {
            self.ctx.set_global_alpha(star_alpha(elapsed, star.phase));
            self.ctx.fill_rect(star.x * width, star.y * height, star.size, star.size);
        }
        self.ctx.set_global_alpha(1.0);
    }
}

fn disc(ctx: &CanvasRenderingContext2d, x: f64, y: f64, radius: f64) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(x, y, radius.max(0.0), 0.0, TAU)?;
    ctx.fill();
    Ok(())
}

fn rgb(channels: &str) -> String {
    format!("rgb({channels})")
}

fn rgba(channels: &str, alpha: f64) -> String {
    format!("rgba({channels}, {:.3})", alpha.clamp(0.0, 1.0))
}

fn star_alpha(elapsed: f64, phase: f64) -> f64 {
    (0.45 + 0.35 * (elapsed * 0.8 + phase).sin()).clamp(0.0, 1.0)
}

fn land_alpha(x: f64, y: f64, depth: f64) -> f64 {
    ((0.25 + 0.75 * lighting(x, y, depth)) * (0.4 + 0.6 * depth)).clamp(0.0, 1.0)
}

fn cloud_alpha(depth: f64) -> f64 {
    (CLOUD_LAYER.opacity * depth * 0.6).clamp(0.0, 1.0)
}

/// Unit vector toward the sun in screen space (y down, z toward the viewer).
fn sun_direction() -> (f64, f64, f64) {
    let (x, y, z) = LIGHTING.sun;
    let length = (x * x + y * y + z * z).sqrt();
    (x / length, -y / length, z / length)
}

/// Brightness in `[0, 1]` of a surface point facing `(x, y, depth)`.
fn lighting(x: f64, y: f64, depth: f64) -> f64 {
    let (sx, sy, sz) = sun_direction();
    let direct = (x * sx + y * sy + depth * sz).max(0.0) * LIGHTING.sun_intensity;
    let glow = LIGHTING.emissive_intensity * 0.1;
    ((LIGHTING.ambient + direct + glow) / (1.0 + LIGHTING.sun_intensity)).clamp(0.0, 1.0)
}

fn run(scene: Rc<RefCell<GlobeScene>>, pending: Rc<RefCell<Option<AnimationFrame>>>) {
    let next = pending.clone();
    let handle = BrowserFrames.request(Box::new(move |timestamp| {
        if let Err(err) = scene.borrow_mut().paint(timestamp) {
            log::warn!("globe frame failed: {err:?}");
        }
        run(scene, next);
    }));
    *pending.borrow_mut() = Some(handle);
}

#[derive(Properties, PartialEq)]
pub struct EarthGlobeProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub style: Option<AttrValue>,
}

/// Slowly spinning, draggable globe drawn on a 2D canvas.
#[function_component(EarthGlobe)]
pub fn earth_globe(props: &EarthGlobeProps) -> Html {
    let canvas_ref = use_node_ref();
    let motion = use_mut_ref(GlobeMotion::default);
    let drag = use_mut_ref(PointerDrag::default);
    let ready = use_state_eq(|| false);

    {
        let motion = motion.clone();
        let ready = ready.clone();
        use_effect_with_deps(
            move |canvas_ref: &NodeRef| {
                let pending: Rc<RefCell<Option<AnimationFrame>>> = Rc::default();

                let context = canvas_ref.cast::<HtmlCanvasElement>().and_then(|canvas| {
                    let ctx = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())?;
                    Some((canvas, ctx))
                });

                match context {
                    Some((canvas, ctx)) => {
                        let on_ready = Callback::from(move |_| ready.set(true));
                        let scene = GlobeScene::new(canvas, ctx, motion, on_ready);
                        log::debug!("globe scene ready with {} land samples", scene.land.len());
                        run(Rc::new(RefCell::new(scene)), pending.clone());
                    }
                    None => {
                        gloo_console::error!("2d canvas context unavailable, globe disabled");
                        ready.set(true);
                    }
                }

                move || {
                    pending.borrow_mut().take();
                }
            },
            canvas_ref.clone(),
        )
    }

    let onpointerdown = {
        let drag = drag.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |e: PointerEvent| {
            let pressed = drag
                .borrow_mut()
                .press(e.pointer_id(), f64::from(e.client_x()), f64::from(e.client_y()));
            if !pressed {
                return;
            }
            // Keep receiving moves when the finger or cursor leaves the canvas.
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                if let Err(err) = canvas.set_pointer_capture(e.pointer_id()) {
                    log::debug!("pointer capture refused: {err:?}");
                }
            }
        })
    };
    let onpointermove = {
        let drag = drag.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |e: PointerEvent| {
            let Some((dx, dy)) = drag
                .borrow_mut()
                .move_to(e.pointer_id(), f64::from(e.client_x()), f64::from(e.client_y()))
            else {
                return;
            };
            let radius = canvas_ref
                .cast::<HtmlCanvasElement>()
                .map(|canvas| f64::from(canvas.client_width().min(canvas.client_height())) * RADIUS_FRACTION)
                .unwrap_or(0.0);
            motion.borrow_mut().drag(dx, dy, radius);
        })
    };
    let end_drag = Callback::from(move |e: PointerEvent| {
        drag.borrow_mut().release(e.pointer_id());
    });

    html! {
        <div class={classes!("earth-globe", props.class.clone())} style={props.style.clone()}>
            if !*ready {
                <div class="globe-loading"><div class="globe-spinner"></div></div>
            }
            <canvas
                ref={canvas_ref}
                class="globe-canvas"
                onpointerdown={onpointerdown}
                onpointermove={onpointermove}
                onpointerup={end_drag.clone()}
                onpointercancel={end_drag}
            />
            <style>
                {r#"
                    .earth-globe {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        min-height: 360px;
                    }
                    .globe-canvas {
                        width: 100%;
                        height: 100%;
                        display: block;
                        cursor: grab;
                        touch-action: pan-y;
                    }
                    .globe-canvas:active {
                        cursor: grabbing;
                    }
                    .globe-loading {
                        position: absolute;
                        inset: 0;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .globe-spinner {
                        width: 48px;
                        height: 48px;
                        border: 3px solid rgba(0, 152, 172, 0.2);
                        border-top-color: var(--primary);
                        border-radius: 50%;
                        animation: globe-spin 1s linear infinite;
                    }
                    @keyframes globe-spin {
                        to { transform: rotate(360deg); }
                    }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sun_direction_is_normalised_and_upper_right() {
        let (x, y, z) = sun_direction();
        assert!(((x * x + y * y + z * z) - 1.0).abs() < 1e-9);
        assert!(x > 0.0 && y < 0.0 && z > 0.0);
    }

    #[test]
    fn sunlit_side_is_brighter_than_the_limb_away_from_it() {
        let (sx, sy, sz) = sun_direction();
        let lit = lighting(sx, sy, sz);
        let dark = lighting(-0.9, 0.4, 0.1);
        assert!(lit > dark);
        assert!((0.0..=1.0).contains(&lit) && (0.0..=1.0).contains(&dark));
    }

    #[test]
    fn layer_fills_are_opaque_colours() {
        assert_eq!(rgb(LAND_CHANNELS), "rgb(96, 196, 150)");
        assert_eq!(rgb(CLOUD_LAYER.color), "rgb(255, 255, 255)");
    }

    #[test]
    fn dot_alphas_stay_in_range() {
        for step in 0..=100 {
            let t = step as f64 / 100.0;
            let star = star_alpha(t * 50.0, t * TAU);
            assert!((0.09..=0.81).contains(&star), "{star}");
            assert!((0.0..=1.0).contains(&land_alpha(0.3, -0.2, t)));
            assert!((0.0..=1.0).contains(&cloud_alpha(t)));
        }
        assert!(land_alpha(0.0, 0.0, 1.0) > land_alpha(0.0, 0.0, 0.1));
        assert_eq!(cloud_alpha(0.0), 0.0);
    }

    #[test]
    fn rgba_clamps_alpha() {
        assert_eq!(rgba("1, 2, 3", 1.7), "rgba(1, 2, 3, 1.000)");
        assert_eq!(rgba("1, 2, 3", -0.2), "rgba(1, 2, 3, 0.000)");
    }
}
