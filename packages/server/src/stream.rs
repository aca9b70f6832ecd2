//! Server-sent events for live catalog updates.

use std::sync::Arc;

use actix_web::{HttpResponse, web};
use futures::Stream;
use tokio::sync::watch;
use ward_air_simulation::Catalog;

use crate::AppState;
use crate::views::api_catalog;

/// `GET /api/wards/stream`
///
/// Sends the current snapshot straight away, then one `snapshot` event per
/// tick until the client disconnects.
pub async fn ward_stream(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/event-stream")
        .insert_header(("Cache-Control", "no-cache"))
        .streaming(snapshot_events(state.store.subscribe()))
}

/// Turns catalog replacements into SSE frames.
///
/// A slow client skips intermediate snapshots and always gets the newest.
fn snapshot_events(
    mut rx: watch::Receiver<Arc<Catalog>>,
) -> impl Stream<Item = Result<web::Bytes, actix_web::Error>> {
    async_stream::stream! {
        let first = rx.borrow_and_update().clone();
        yield Ok(sse_frame(&first));

        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update().clone();
            yield Ok(sse_frame(&snapshot));
        }

        log::debug!("Catalog store closed; ending ward stream");
    }
}

fn sse_frame(catalog: &Catalog) -> web::Bytes {
    match serde_json::to_string(&api_catalog(catalog)) {
        Ok(json) => web::Bytes::from(format!(
            "event: snapshot\nid: {}\ndata: {json}\n\n",
            catalog.tick
        )),
        Err(e) => {
            log::error!("Failed to serialize catalog tick {}: {e}", catalog.tick);
            web::Bytes::from_static(b": serialization error\n\n")
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::StreamExt as _;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ward_air_simulation::step_catalog;

    use super::*;
    use crate::test_support::state;

    fn frame_text(bytes: &web::Bytes) -> &str {
        std::str::from_utf8(bytes).unwrap()
    }

    #[test]
    fn frame_is_a_snapshot_event() {
        let state = state("delhi_ncr");
        let frame = sse_frame(&state.store.current());
        let text = frame_text(&frame);

        assert!(text.starts_with("event: snapshot\nid: 0\ndata: {"));
        assert!(text.ends_with("\n\n"));
        assert!(text.contains("\"catalogId\":\"delhi_ncr\""));
    }

    #[actix_web::test]
    async fn streams_current_then_each_tick() {
        let state = state("delhi_ncr");
        let mut events = Box::pin(snapshot_events(state.store.subscribe()));

        let first = events.next().await.unwrap().unwrap();
        assert!(frame_text(&first).contains("id: 0\n"));

        let mut rng = StdRng::seed_from_u64(5);
        state.store.advance(|c| step_catalog(c, &mut rng));

        let second = events.next().await.unwrap().unwrap();
        assert!(frame_text(&second).contains("id: 1\n"));
    }
}
