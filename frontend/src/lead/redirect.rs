use gloo_timers::callback::Timeout;
use log::{error, info, warn};
use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::Window;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectStrategy {
    TopLevel,
    Parent,
    CurrentWindow,
}

const FRAMED_ORDER: [RedirectStrategy; 3] = [
    RedirectStrategy::TopLevel,
    RedirectStrategy::Parent,
    RedirectStrategy::CurrentWindow,
];

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RedirectError {
    #[error("{0:?} browsing context is not reachable")]
    Unreachable(RedirectStrategy),
    #[error("navigation blocked: {0}")]
    Blocked(String),
}

/// The browsing contexts a page can try to navigate.
#[cfg_attr(test, mockall::automock)]
pub trait BrowsingContext {
    /// True when the page runs inside a frame of another page.
    fn is_framed(&self) -> bool;
    fn assign(&self, strategy: RedirectStrategy, url: &str) -> Result<(), RedirectError>;
}

/// Navigates the outermost reachable context to `url`.
///
/// A framed page tries the top-level context, then its parent, then itself; the first one that
/// accepts the navigation wins. A page that is not framed only navigates itself.
pub fn redirect<C: BrowsingContext>(ctx: &C, url: &str) -> Result<RedirectStrategy, RedirectError> {
    let strategies: &[RedirectStrategy] = if ctx.is_framed() {
        &FRAMED_ORDER
    } else {
        &[RedirectStrategy::CurrentWindow]
    };

    let mut last_error = RedirectError::Unreachable(RedirectStrategy::CurrentWindow);
    for &strategy in strategies {
        match ctx.assign(strategy, url) {
            Ok(()) => {
                info!("Redirecting via {:?} to {}", strategy, url);
                return Ok(strategy);
            }
            Err(e) => {
                warn!("Redirect via {:?} failed: {}", strategy, e);
                last_error = e;
            }
        }
    }
    Err(last_error)
}

pub struct WindowContext {
    window: Window,
}

impl WindowContext {
    pub fn current() -> Option<Self> {
        web_sys::window().map(|window| Self { window })
    }
}

impl BrowsingContext for WindowContext {
    fn is_framed(&self) -> bool {
        match self.window.top() {
            Ok(Some(top)) => {
                let top: &JsValue = top.as_ref();
                let this: &JsValue = self.window.as_ref();
                top != this
            }
            Ok(None) => false,
            // Reading `top` only throws from inside a foreign frame
            Err(_) => true,
        }
    }

    fn assign(&self, strategy: RedirectStrategy, url: &str) -> Result<(), RedirectError> {
        let target = match strategy {
            RedirectStrategy::TopLevel => self.window.top(),
            RedirectStrategy::Parent => self.window.parent(),
            RedirectStrategy::CurrentWindow => Ok(Some(self.window.clone())),
        }
        .map_err(|e| RedirectError::Blocked(describe(&e)))?
        .ok_or(RedirectError::Unreachable(strategy))?;

        target
            .location()
            .set_href(url)
            .map_err(|e| RedirectError::Blocked(describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg_attr(test, mockall::automock)]
pub trait RedirectScheduler {
    fn schedule_redirect(&self, url: &str, delay_ms: u32);
}

/// Fires the redirect from a browser timer. Once scheduled it is never cancelled.
pub struct BrowserRedirect;

impl RedirectScheduler for BrowserRedirect {
    fn schedule_redirect(&self, url: &str, delay_ms: u32) {
        let url = url.to_string();
        Timeout::new(delay_ms, move || match WindowContext::current() {
            Some(ctx) => {
                if let Err(e) = redirect(&ctx, &url) {
                    error!("Could not redirect to {}: {}", url, e);
                }
            }
            None => error!("No window to redirect to {}", url),
        })
        .forget();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::{predicate::eq, Sequence};

    const URL: &str = "https://imigoimmigration.com";

    #[test]
    fn unframed_page_navigates_itself_only() {
        let mut ctx = MockBrowsingContext::new();
        ctx.expect_is_framed().return_const(false);
        ctx.expect_assign()
            .with(eq(RedirectStrategy::CurrentWindow), eq(URL))
            .times(1)
            .returning(|_, _| Ok(()));

        assert_eq!(redirect(&ctx, URL), Ok(RedirectStrategy::CurrentWindow));
    }

    #[test]
    fn framed_page_prefers_top_level() {
        let mut ctx = MockBrowsingContext::new();
        ctx.expect_is_framed().return_const(true);
        ctx.expect_assign()
            .with(eq(RedirectStrategy::TopLevel), eq(URL))
            .times(1)
            .returning(|_, _| Ok(()));

        assert_eq!(redirect(&ctx, URL), Ok(RedirectStrategy::TopLevel));
    }

    #[test]
    fn blocked_top_falls_back_to_parent() {
        let mut seq = Sequence::new();
        let mut ctx = MockBrowsingContext::new();
        ctx.expect_is_framed().return_const(true);
        ctx.expect_assign()
            .with(eq(RedirectStrategy::TopLevel), eq(URL))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(RedirectError::Blocked("SecurityError".into())));
        ctx.expect_assign()
            .with(eq(RedirectStrategy::Parent), eq(URL))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        assert_eq!(redirect(&ctx, URL), Ok(RedirectStrategy::Parent));
    }

    #[test]
    fn current_window_is_the_last_resort() {
        let mut seq = Sequence::new();
        let mut ctx = MockBrowsingContext::new();
        ctx.expect_is_framed().return_const(true);
        ctx.expect_assign()
            .with(eq(RedirectStrategy::TopLevel), eq(URL))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(RedirectError::Blocked("SecurityError".into())));
        ctx.expect_assign()
            .with(eq(RedirectStrategy::Parent), eq(URL))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|strategy, _| Err(RedirectError::Unreachable(strategy)));
        ctx.expect_assign()
            .with(eq(RedirectStrategy::CurrentWindow), eq(URL))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(()));

        assert_eq!(redirect(&ctx, URL), Ok(RedirectStrategy::CurrentWindow));
    }

    #[test]
    fn reports_the_last_failure() {
        let mut ctx = MockBrowsingContext::new();
        ctx.expect_is_framed().return_const(false);
        ctx.expect_assign()
            .times(1)
            .returning(|_, _| Err(RedirectError::Blocked("sandboxed".into())));

        assert_eq!(redirect(&ctx, URL), Err(RedirectError::Blocked("sandboxed".into())));
    }
}
