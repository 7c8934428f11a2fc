use leptos::{html::Canvas, prelude::*};

#[cfg(feature = "hydrate")]
mod draw {
    use consts::particles::{COLOR, RADIUS};
    use state::particles::ParticleField;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

    #[derive(Debug, thiserror::Error)]
    pub enum CanvasError {
        #[error("2d context is not available")]
        NoContext,
        #[error("canvas call failed: {0}")]
        Js(String),
    }

    impl From<JsValue> for CanvasError {
        fn from(value: JsValue) -> Self {
            CanvasError::Js(format!("{value:?}"))
        }
    }

    pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, CanvasError> {
        canvas
            .get_context("2d")?
            .ok_or(CanvasError::NoContext)?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| CanvasError::NoContext)
    }

    pub fn frame(ctx: &CanvasRenderingContext2d, field: &ParticleField) -> Result<(), CanvasError> {
        ctx.clear_rect(0.0, 0.0, field.width(), field.height());
        ctx.set_fill_style_str(COLOR);
        for particle in field.particles() {
            ctx.set_global_alpha(particle.life);
            ctx.begin_path();
            ctx.arc(particle.x, particle.y, RADIUS, 0.0, std::f64::consts::TAU)?;
            ctx.fill();
        }
        ctx.set_global_alpha(1.0);
        Ok(())
    }
}

/// Full-window canvas with drifting, fading particles behind the page.
#[component]
pub fn ParticleCanvas() -> impl IntoView {
    let canvas_ref = NodeRef::<Canvas>::new();

    #[cfg(feature = "hydrate")]
    {
        use leptos_use::{use_raf_fn, use_window_size, UseWindowSizeReturn};
        use rand::{rngs::SmallRng, SeedableRng};
        use state::particles::ParticleField;

        let field = StoredValue::new((ParticleField::default(), SmallRng::from_os_rng()));
        let UseWindowSizeReturn { width, height, .. } = use_window_size();

        Effect::new(move |_| {
            let (w, h) = (width.get(), height.get());
            if let Some(canvas) = canvas_ref.get() {
                canvas.set_width(w as u32);
                canvas.set_height(h as u32);
            }
            field.update_value(|(field, _)| field.resize(w, h));
        });

        let _animation = use_raf_fn(move |_| {
            let Some(canvas) = canvas_ref.get_untracked() else {
                return;
            };
            let ctx = match draw::context_2d(&canvas) {
                Ok(ctx) => ctx,
                Err(e) => {
                    log::warn!("particle background disabled: {e}");
                    return;
                }
            };
            field.update_value(|(field, rng)| {
                field.step(rng);
                if let Err(e) = draw::frame(&ctx, field) {
                    log::warn!("failed to draw particles: {e}");
                }
            });
        });
    }

    view! {
        <canvas
            id="bg-canvas"
            node_ref=canvas_ref
            class="fixed inset-0 -z-10 pointer-events-none"
        ></canvas>
    }
}
