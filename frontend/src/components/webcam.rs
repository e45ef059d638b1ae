//! Camera preview with single-frame capture to a JPEG data URL.

use leptos::{html, *};

pub const CAMERA_UNAVAILABLE_MESSAGE: &str = "Não foi possível acessar a câmera.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraStep {
    Idle,
    Previewing,
}

impl CameraStep {
    pub fn primary_label(&self) -> &'static str {
        match self {
            CameraStep::Idle => "Foto",
            CameraStep::Previewing => "Capturar Foto",
        }
    }
}

/// Which camera request is still wanted. A stream that resolves after the
/// request was cancelled (or the component went away) must be stopped at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CameraRequests {
    current: u64,
    pending: bool,
}

impl CameraRequests {
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.pending = true;
        self.current
    }

    pub fn cancel(&mut self) {
        self.current = self.current.wrapping_add(1);
        self.pending = false;
    }

    /// True only for the latest request, and only once.
    pub fn settle(&mut self, id: u64) -> bool {
        let wanted = self.pending && id == self.current;
        if wanted {
            self.pending = false;
        }
        wanted
    }
}

#[cfg(target_arch = "wasm32")]
mod camera {
    use super::CAMERA_UNAVAILABLE_MESSAGE;
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        CanvasRenderingContext2d, HtmlCanvasElement, HtmlVideoElement, MediaStream,
        MediaStreamConstraints, MediaStreamTrack,
    };

    fn unavailable(err: JsValue) -> String {
        log::warn!("Camera error: {:?}", err);
        CAMERA_UNAVAILABLE_MESSAGE.to_string()
    }

    pub async fn start(video: &HtmlVideoElement) -> Result<MediaStream, String> {
        let window = web_sys::window().ok_or(CAMERA_UNAVAILABLE_MESSAGE)?;
        let devices = window.navigator().media_devices().map_err(unavailable)?;
        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(unavailable)?;
        let stream: MediaStream = JsFuture::from(promise)
            .await
            .map_err(unavailable)?
            .dyn_into()
            .map_err(unavailable)?;
        video.set_src_object(Some(&stream));
        let _ = video.play();
        Ok(stream)
    }

    pub fn stop(stream: &MediaStream) {
        for track in stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
                track.stop();
            }
        }
    }

    pub fn detach(video: &HtmlVideoElement) {
        video.set_src_object(None);
    }

    pub fn snapshot(video: &HtmlVideoElement) -> Result<String, String> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(CAMERA_UNAVAILABLE_MESSAGE)?;
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(unavailable)?
            .dyn_into()
            .map_err(|_| CAMERA_UNAVAILABLE_MESSAGE.to_string())?;
        canvas.set_width(video.video_width());
        canvas.set_height(video.video_height());
        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .map_err(unavailable)?
            .ok_or(CAMERA_UNAVAILABLE_MESSAGE)?
            .dyn_into()
            .map_err(|_| CAMERA_UNAVAILABLE_MESSAGE.to_string())?;
        context
            .draw_image_with_html_video_element(video, 0.0, 0.0)
            .map_err(unavailable)?;
        canvas
            .to_data_url_with_type("image/jpeg")
            .map_err(unavailable)
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod camera {
    use super::CAMERA_UNAVAILABLE_MESSAGE;
    use web_sys::{HtmlVideoElement, MediaStream};

    pub async fn start(_video: &HtmlVideoElement) -> Result<MediaStream, String> {
        Err(CAMERA_UNAVAILABLE_MESSAGE.to_string())
    }

    pub fn stop(_stream: &MediaStream) {}

    pub fn detach(_video: &HtmlVideoElement) {}

    pub fn snapshot(_video: &HtmlVideoElement) -> Result<String, String> {
        Err(CAMERA_UNAVAILABLE_MESSAGE.to_string())
    }
}

/// Toggles a live preview; the second click captures a frame and hands the
/// data URL to `on_capture`.
#[component]
pub fn WebcamCapture(on_capture: Callback<String>) -> impl IntoView {
    let video_ref = create_node_ref::<html::Video>();
    let step = create_rw_signal(CameraStep::Idle);
    let error = create_rw_signal(None::<String>);
    let stream = store_value(None::<web_sys::MediaStream>);
    let requests = store_value(CameraRequests::default());

    let stop_stream = move || {
        requests.update_value(CameraRequests::cancel);
        if let Some(active) = stream.get_value() {
            camera::stop(&active);
        }
        if let Some(video) = video_ref.get_untracked() {
            camera::detach(&video);
        }
        stream.set_value(None);
        step.set(CameraStep::Idle);
    };

    on_cleanup(move || {
        if let Some(active) = stream.get_value() {
            camera::stop(&active);
        }
    });

    let on_primary = move |_| {
        error.set(None);
        match step.get_untracked() {
            CameraStep::Idle => {
                let Some(video) = video_ref.get_untracked() else {
                    return;
                };
                let mut request = 0;
                requests.update_value(|r| request = r.begin());
                step.set(CameraStep::Previewing);
                spawn_local(async move {
                    let result = camera::start(&video).await;
                    let wanted = requests
                        .try_update_value(|r| r.settle(request))
                        .unwrap_or(false);
                    match result {
                        Ok(started) if wanted => stream.set_value(Some(started)),
                        Ok(started) => {
                            log::debug!("Camera request {} no longer wanted, stopping", request);
                            camera::stop(&started);
                            camera::detach(&video);
                        }
                        Err(msg) if wanted => {
                            error.set(Some(msg));
                            step.set(CameraStep::Idle);
                        }
                        Err(_) => {}
                    }
                });
            }
            CameraStep::Previewing => {
                let captured = video_ref
                    .get_untracked()
                    .ok_or_else(|| CAMERA_UNAVAILABLE_MESSAGE.to_string())
                    .and_then(|video| camera::snapshot(&video));
                match captured {
                    Ok(data_url) => {
                        stop_stream();
                        on_capture.call(data_url);
                    }
                    Err(msg) => error.set(Some(msg)),
                }
            }
        }
    };

    view! {
        <div class="space-y-2">
            <video
                node_ref=video_ref
                autoplay=true
                playsinline=true
                muted=true
                class=move || {
                    if step.get() == CameraStep::Previewing {
                        "w-full rounded-md border border-border"
                    } else {
                        "hidden"
                    }
                }
            ></video>
            <Show when=move || error.get().is_some()>
                <p class="text-sm text-status-error-text">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="flex gap-2">
                <button
                    type="button"
                    class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold bg-surface-muted text-fg border border-border"
                    on:click=on_primary
                >
                    {move || step.get().primary_label()}
                </button>
                <Show when=move || step.get() == CameraStep::Previewing>
                    <button
                        type="button"
                        class="inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold text-fg-muted hover:text-fg"
                        on:click=move |_| stop_stream()
                    >
                        "Cancelar"
                    </button>
                </Show>
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn starts_idle_with_hidden_preview() {
        let html = render_to_string(move || {
            view! { <WebcamCapture on_capture=Callback::new(|_| {}) /> }
        });
        assert!(html.contains("Foto"));
        assert!(html.contains("hidden"));
        assert!(!html.contains("Cancelar"));
    }
}
