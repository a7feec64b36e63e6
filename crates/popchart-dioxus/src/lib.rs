// File: crates/popchart-dioxus/src/lib.rs
// Summary: Dioxus desktop component for the population bar chart: region toggles, chart image,
// play/pause button and year slider, all driven by a `popchart_core::Session`.
// Notes:
// - UI deps stay behind the `desktop` feature, so the workspace builds without fetching Dioxus
//   unless explicitly enabled.
// - The chart is rendered on the CPU and shown as a PNG data URL.

use popchart_core::{Config, HttpSource, Session};

/// Page heading shown above the chart.
pub const TITLE: &str = "Population growth per country, 1950 to 2021";
pub const SUBTITLE: &str = "Click on the legend below to filter by continent";

/// Build a session against `config.api_base`; logs and returns `None` if no HTTP client can be made.
pub fn connect(config: &Config) -> Option<Session<HttpSource>> {
    match HttpSource::new(config.api_base.clone(), config.request_timeout()) {
        Ok(source) => Some(Session::new(config, source)),
        Err(e) => {
            tracing::error!("cannot create HTTP client: {e}");
            None
        }
    }
}

#[cfg(feature = "desktop")]
pub mod ui {
    use super::*;
    use base64::Engine as _;
    use dioxus::prelude::*;
    use popchart_core::controls::{play_button, region_toggles, slider_ticks, year_slider, SliderTick};
    use popchart_core::{Action, BarChart, RenderOptions, Theme};
    use std::time::Duration;

    /// How often background events (fetch results, ticks) are drained into the state.
    const POLL_INTERVAL: Duration = Duration::from_millis(50);

    #[derive(Props, Clone, PartialEq)]
    pub struct PopulationBarChartProps {
        #[props(default)]
        pub config: Config,
        #[props(default = Theme::light())]
        pub theme: Theme,
        /// Rendered chart width in pixels
        #[props(default = 1000)]
        pub width_px: i32,
        /// Rendered chart height in pixels
        #[props(default = 600)]
        pub height_px: i32,
    }

    #[component]
    pub fn PopulationBarChart(props: PopulationBarChartProps) -> Element {
        let config = props.config.clone();
        // Session is not reactive itself; `revision` is bumped whenever it changes.
        let mut session = use_hook(move || CopyValue::new(connect(&config)));
        let mut revision = use_signal(|| 0u64);

        use_future(move || async move {
            loop {
                tokio::time::sleep(POLL_INTERVAL).await;
                let handled = session.write().as_mut().map(|s| s.pump()).unwrap_or(0);
                if handled > 0 {
                    revision += 1;
                }
            }
        });

        let mut dispatch = move |action: Action| {
            if let Some(s) = session.write().as_mut() {
                s.dispatch(action);
            }
            revision += 1;
        };

        // Subscribe to changes.
        let _ = revision();

        let guard = session.read();
        let Some(s) = guard.as_ref() else {
            return rsx! { p { "Unable to reach the population API." } };
        };
        let state = s.state();
        let toggles = region_toggles(state);
        let slider = year_slider(state);
        let button = play_button(state);
        let tick_labels: Vec<String> = slider_ticks(slider.min, slider.max)
            .into_iter()
            .map(|tick| match tick {
                SliderTick::Year(year) => year.to_string(),
                SliderTick::Mark => "|".to_string(),
            })
            .collect();

        let img_src = s.chart().and_then(|chart| {
            let opts = RenderOptions { width: props.width_px, height: props.height_px, theme: props.theme, ..RenderOptions::default() };
            match BarChart::from_config(&chart).render_to_png_bytes(&opts) {
                Ok(bytes) => {
                    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
                    Some(format!("data:image/png;base64,{b64}"))
                }
                Err(e) => {
                    tracing::error!("chart render failed: {e}");
                    None
                }
            }
        });
        drop(guard);

        rsx! {
            div { style: "font-family:sans-serif; padding:16px; width:{props.width_px}px;",
                h2 { style: "margin:0;", "{TITLE}" }
                p { style: "margin:4px 0 12px; color:#666;", "{SUBTITLE}" }
                div { style: "display:flex; flex-wrap:wrap; gap:12px; align-items:center;",
                    p { style: "margin:0; font-weight:bold;", "Region" }
                    for toggle in toggles {
                        button {
                            key: "{toggle.region}",
                            style: "display:flex; align-items:center; gap:6px; border:none; background:none; cursor:pointer;",
                            onclick: move |_| dispatch(Action::ToggleRegion(toggle.region)),
                            div { style: "width:16px; height:16px; background:{toggle.swatch};" }
                            span {
                                style: if toggle.active { "" } else { "text-decoration:line-through; color:#999;" },
                                "{toggle.region}"
                            }
                        }
                    }
                }
                if let Some(src) = img_src {
                    img { width: "{props.width_px}", height: "{props.height_px}", src }
                    div { style: "display:flex; align-items:center; gap:12px; margin-top:8px;",
                        button {
                            title: button.label(),
                            onclick: move |_| dispatch(Action::TogglePlayback),
                            "{button.icon()} {button.label()}"
                        }
                        div { style: "flex:1;",
                            input {
                                r#type: "range",
                                style: "width:100%;",
                                min: "{slider.min}",
                                max: "{slider.max}",
                                step: "{slider.step}",
                                value: "{slider.value}",
                                oninput: move |evt: FormEvent| {
                                    if let Ok(year) = evt.value().parse::<i32>() {
                                        dispatch(Action::SetYear(year));
                                    }
                                },
                            }
                            div { style: "display:flex; justify-content:space-between; font-size:10px; color:#666;",
                                for (i, label) in tick_labels.into_iter().enumerate() {
                                    span { key: "{i}", "{label}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    /// Launch a desktop window showing the chart for `config`.
    pub fn run_demo_ui(config: Config) -> Result<(), String> {
        config.validate().map_err(|e| e.to_string())?;

        let providers: Vec<Box<dyn Fn() -> Box<dyn std::any::Any> + Send + Sync>> = vec![Box::new(move || {
            Box::new(config.clone()) as Box<dyn std::any::Any>
        })];
        let cfg = dioxus_desktop::Config::new().with_window(
            dioxus_desktop::WindowBuilder::new().with_title("Population growth per country"),
        );
        let globals: Vec<Box<dyn std::any::Any>> = vec![Box::new(cfg)];
        dioxus_desktop::launch::launch(App, providers, globals);
        #[allow(unreachable_code)]
        Ok(())
    }

    #[component]
    fn App() -> Element {
        let config: Config = use_context();
        rsx! { PopulationBarChart { config } }
    }
}

/// Fallback when the `desktop` feature is not enabled.
#[cfg(not(feature = "desktop"))]
pub fn run_demo_ui(_config: Config) -> Result<(), &'static str> {
    Err("popchart-dioxus built without `desktop` feature; enable features to run UI")
}
