//! Link accessibility checking.
//!
//! Every discovered link gets one probe task. At most `max_concurrent` probes
//! are in flight at once; a task takes a semaphore permit before it is spawned
//! and drops it when it finishes, whatever the outcome. Results are drained
//! by the caller from a `FuturesUnordered`, so no list is shared between tasks.

mod probe;

use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, warn};
use tokio::sync::Semaphore;

pub use probe::{HttpProbe, LinkProbe, ProbeError, ProbeMethod, ProbeResponse};

use crate::config::{
    HTTP_STATUS_BAD_REQUEST, HTTP_STATUS_METHOD_NOT_ALLOWED, HTTP_STATUS_NOT_IMPLEMENTED,
    LINK_CHECK_CONCURRENCY,
};
use crate::models::UnreachableLink;

/// Concurrent reachability checker over a list of absolute URLs.
#[derive(Debug)]
pub struct LinkChecker<P: LinkProbe> {
    probe: Arc<P>,
    max_concurrent: usize,
}

impl<P: LinkProbe> LinkChecker<P> {
    /// Creates a checker. `max_concurrent` is clamped to `1..=LINK_CHECK_CONCURRENCY`.
    pub fn new(probe: P, max_concurrent: usize) -> Self {
        Self {
            probe: Arc::new(probe),
            max_concurrent: max_concurrent.clamp(1, LINK_CHECK_CONCURRENCY),
        }
    }

    /// Effective number of probes allowed in flight at once.
    pub fn max_concurrent(&self) -> usize {
        self.max_concurrent
    }

    /// Probes every link and returns the ones that are unreachable.
    ///
    /// Duplicates are probed independently. Reachable links produce no entry.
    /// The output order follows completion order and is not stable.
    pub async fn check_links(&self, links: &[String]) -> Vec<UnreachableLink> {
        let mut unreachable = Vec::new();
        if links.is_empty() {
            return unreachable;
        }

        debug!(
            "Checking accessibility of {} link(s), at most {} at a time",
            links.len(),
            self.max_concurrent
        );

        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let mut tasks = FuturesUnordered::new();

        for link in links {
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => {
                    warn!("Semaphore closed, skipping link: {link}");
                    continue;
                }
            };

            let probe = Arc::clone(&self.probe);
            let url = link.clone();
            tasks.push(tokio::spawn(async move {
                let _permit = permit;
                probe_link(probe.as_ref(), url).await
            }));
        }

        while let Some(joined) = tasks.next().await {
            match joined {
                Ok(Some(record)) => unreachable.push(record),
                Ok(None) => {}
                Err(e) => warn!("Link probe task failed: {e}"),
            }
        }

        unreachable
    }
}

/// Runs the HEAD-then-GET probe for one link.
///
/// Returns `None` when the link is reachable.
pub async fn probe_link<P: LinkProbe>(probe: &P, url: String) -> Option<UnreachableLink> {
    debug!("Checking link accessibility: {url}");

    let head = match probe.send(ProbeMethod::Head, &url).await {
        Ok(response) => response,
        Err(e) => return Some(network_failure(url, e)),
    };

    if is_method_rejected(head.status) {
        debug!(
            "HEAD rejected with {} for {url}, retrying with GET",
            head.status
        );
        return match probe.send(ProbeMethod::Get, &url).await {
            Ok(response) => http_failure(url, response),
            Err(e) => Some(network_failure(url, e)),
        };
    }

    http_failure(url, head)
}

/// 405, or 501 from servers that do not implement HEAD at all.
fn is_method_rejected(status: u16) -> bool {
    status == HTTP_STATUS_METHOD_NOT_ALLOWED || status == HTTP_STATUS_NOT_IMPLEMENTED
}

fn http_failure(url: String, response: ProbeResponse) -> Option<UnreachableLink> {
    if response.status < HTTP_STATUS_BAD_REQUEST {
        return None;
    }
    debug!("Link {url} is unreachable: {}", response.status_text);
    Some(UnreachableLink {
        url,
        status_code: response.status,
        error: response.status_text,
    })
}

fn network_failure(url: String, error: ProbeError) -> UnreachableLink {
    debug!("Link {url} is unreachable: {error}");
    UnreachableLink {
        url,
        status_code: 0,
        error: error.to_string(),
    }
}
