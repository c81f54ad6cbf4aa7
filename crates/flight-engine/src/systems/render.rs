use crate::components::visual::Visual;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of visuals, keeping their order.
/// Inactive visuals are skipped. When there are more active visuals than the
/// buffer holds, the rest are dropped. A warning is logged when the buffer
/// starts overflowing, not again until a frame fits.
///
/// Returns the number of visuals that did not fit.
pub fn build_render_buffer<'a>(visuals: impl Iterator<Item = &'a Visual>, buffer: &mut RenderBuffer) -> usize {
    buffer.clear();

    let mut dropped = 0;
    for visual in visuals {
        if !visual.active {
            continue;
        }
        if !buffer.push(RenderInstance::from_visual(visual)) {
            dropped += 1;
        }
    }

    if buffer.note_overflow(dropped) {
        log::warn!(
            "render buffer full: {} visuals dropped (capacity {})",
            dropped,
            buffer.capacity()
        );
    }
    dropped
}
