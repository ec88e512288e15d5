//! Web Audio graph behind the player's frequency bars.
//!
//! One `AudioContext` and one `AnalyserNode` live for the whole page. The
//! player's `<audio>` element is routed through them the first time it
//! plays; attaching a different element disconnects the previous source
//! before the new one is wired in.

use leptos::prelude::*;
use site_core::visualizer::{sample_bars, FrequencySource, FFT_SIZE, SMOOTHING};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AnalyserNode, AudioContext, AudioContextState, HtmlMediaElement, MediaElementAudioSourceNode};

struct AudioGraph {
    ctx: AudioContext,
    analyser: AnalyserNode,
    source: Option<(HtmlMediaElement, MediaElementAudioSourceNode)>,
}

thread_local! {
    static GRAPH: RefCell<Option<AudioGraph>> = const { RefCell::new(None) };
    static FRAME_HANDLE: RefCell<Option<i32>> = const { RefCell::new(None) };
    static FRAME_CB: RefCell<Option<Closure<dyn FnMut()>>> = const { RefCell::new(None) };
    static SCRATCH: RefCell<Vec<u8>> = const { RefCell::new(Vec::new()) };
}

/// `AnalyserNode` as a [`FrequencySource`].
struct WebAnalyser<'a>(&'a AnalyserNode);

impl FrequencySource for WebAnalyser<'_> {
    fn bin_count(&self) -> usize {
        self.0.frequency_bin_count() as usize
    }

    fn byte_frequency_data(&mut self, out: &mut [u8]) {
        self.0.get_byte_frequency_data(out);
    }
}

fn build_graph() -> Result<AudioGraph, String> {
    let ctx = AudioContext::new().map_err(|e| format!("AudioContext: {e:?}"))?;
    let analyser = ctx.create_analyser().map_err(|e| format!("create_analyser: {e:?}"))?;
    analyser.set_fft_size(FFT_SIZE as u32);
    analyser.set_smoothing_time_constant(SMOOTHING);
    analyser
        .connect_with_audio_node(&ctx.destination())
        .map_err(|e| format!("analyser -> destination: {e:?}"))?;
    Ok(AudioGraph { ctx, analyser, source: None })
}

/// Route `element` through the analyser. Re-attaching the current element is a no-op.
pub fn attach(element: &HtmlMediaElement) -> Result<(), String> {
    GRAPH.with(|g| {
        let mut g = g.borrow_mut();
        if g.is_none() {
            *g = Some(build_graph()?);
            log::debug!("Audio analyser created (fft {FFT_SIZE})");
        }
        let Some(graph) = g.as_mut() else {
            return Err("audio graph missing".to_string());
        };

        if graph.source.as_ref().is_some_and(|(el, _)| el == element) {
            return Ok(());
        }
        if let Some((_, previous)) = graph.source.take() {
            if let Err(e) = previous.disconnect() {
                log::warn!("disconnect previous source: {e:?}");
            }
        }

        let source = graph
            .ctx
            .create_media_element_source(element)
            .map_err(|e| format!("create_media_element_source: {e:?}"))?;
        source
            .connect_with_audio_node(&graph.analyser)
            .map_err(|e| format!("source -> analyser: {e:?}"))?;
        graph.source = Some((element.clone(), source));
        Ok(())
    })
}

/// Browsers start the context suspended until a user gesture.
pub async fn resume() {
    let ctx = GRAPH.with(|g| g.borrow().as_ref().map(|graph| graph.ctx.clone()));
    let Some(ctx) = ctx else { return };
    if ctx.state() != AudioContextState::Suspended {
        return;
    }
    match ctx.resume() {
        Ok(promise) => {
            if let Err(e) = JsFuture::from(promise).await {
                log::warn!("AudioContext resume: {e:?}");
            }
        }
        Err(e) => log::warn!("AudioContext resume: {e:?}"),
    }
}

/// Push a fresh set of bar heights into `bars` every animation frame.
pub fn start_sampling(bars: RwSignal<Vec<f32>>) {
    stop_sampling();

    let tick = Closure::<dyn FnMut()>::new(move || {
        let sampled = GRAPH.with(|g| {
            g.borrow().as_ref().map(|graph| {
                SCRATCH.with(|s| sample_bars(&mut WebAnalyser(&graph.analyser), &mut s.borrow_mut()))
            })
        });
        if let Some(heights) = sampled {
            bars.set(heights.to_vec());
        }
        request_frame();
    });
    FRAME_CB.with(|cb| *cb.borrow_mut() = Some(tick));
    request_frame();
}

fn request_frame() {
    let Some(window) = web_sys::window() else { return };
    let handle = FRAME_CB.with(|cb| {
        cb.borrow()
            .as_ref()
            .and_then(|tick| window.request_animation_frame(tick.as_ref().unchecked_ref()).ok())
    });
    FRAME_HANDLE.with(|h| *h.borrow_mut() = handle);
}

pub fn stop_sampling() {
    FRAME_HANDLE.with(|h| {
        if let Some(id) = h.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
    });
    FRAME_CB.with(|cb| cb.borrow_mut().take());
}
