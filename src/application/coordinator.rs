use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    log_debug,
    application::{
        ports::{CommentGateway, ExtensionHost, PanelSurface, TaskSpawner},
        session::PanelSession,
    },
    config::PanelConfig,
    domain::{
        chart::ChartSeries,
        errors::{NetworkError, PanelError, PanelResult},
        events::{BroadcastMessage, Credentials, DomainEvent, UserAction},
        logging::{LogComponent, LogLevel, get_logger},
        requests::OutboundRequest,
    },
};

/// Wires the host's events to the panel session.
///
/// Cloning is cheap and shares the same session; every registered handler
/// holds a clone.
pub struct PanelCoordinator<G, S> {
    session: Rc<RefCell<PanelSession>>,
    gateway: Rc<G>,
    surface: Rc<S>,
    spawner: Rc<dyn TaskSpawner>,
}

impl<G, S> Clone for PanelCoordinator<G, S> {
    fn clone(&self) -> Self {
        Self {
            session: Rc::clone(&self.session),
            gateway: Rc::clone(&self.gateway),
            surface: Rc::clone(&self.surface),
            spawner: Rc::clone(&self.spawner),
        }
    }
}

impl<G, S> PanelCoordinator<G, S>
where
    G: CommentGateway + 'static,
    S: PanelSurface + 'static,
{
    pub fn new(config: PanelConfig, gateway: G, surface: S, spawner: impl TaskSpawner + 'static) -> Self {
        Self {
            session: Rc::new(RefCell::new(PanelSession::new(config))),
            gateway: Rc::new(gateway),
            surface: Rc::new(surface),
            spawner: Rc::new(spawner),
        }
    }

    /// Register all handlers on the host
    pub fn attach<H: ExtensionHost>(&self, host: &H) -> PanelResult<()> {
        let this = self.clone();
        host.on_authorized(Box::new(move |credentials: Credentials| this.handle_authorized(credentials)))?;

        host.on_context(Box::new(|context: String| {
            log_debug!(LogComponent::Application("Coordinator"), "Context: {}", context);
        }))?;

        let target = self.session.borrow().config().broadcast_target.clone();
        let this = self.clone();
        host.on_message(
            &target,
            Box::new(move |message: BroadcastMessage| {
                // Failures are logged inside; the listener stays registered.
                let _ = this.handle_message(&message);
            }),
        )?;

        let this = self.clone();
        host.on_user_action(Box::new(move |action: UserAction| this.handle_user_action(action)))?;

        get_logger().info(
            LogComponent::Application("Coordinator"),
            &format!("Listening for '{}' broadcasts", target),
        );
        Ok(())
    }

    pub fn handle_authorized(&self, credentials: Credentials) {
        get_logger().info(
            LogComponent::Application("Coordinator"),
            &format!("{}: setting auth headers", credentials.event_type()),
        );

        let user_id = credentials.user_id.clone();
        let fetch_state = {
            let mut session = self.session.borrow_mut();
            session.authorize(credentials);
            session.config().fetch_state_on_authorize
        };

        if let Err(e) = self.surface.show_authorized(&user_id) {
            get_logger().warn(LogComponent::Application("Coordinator"), &e.to_string());
        }

        if fetch_state {
            let request = self.session.borrow().state_request();
            match request {
                Ok(request) => {
                    let this = self.clone();
                    self.spawner.spawn(Box::pin(async move {
                        let _ = this.fetch_state(request).await;
                    }));
                }
                Err(e) => get_logger().warn(LogComponent::Application("Coordinator"), &e.to_string()),
            }
        }
    }

    /// Show the raw payload, decode it and redraw.
    ///
    /// A malformed payload is logged and dropped; chart state is unchanged.
    pub fn handle_message(&self, message: &BroadcastMessage) -> PanelResult<ChartSeries> {
        get_logger().log_with_metadata(
            LogLevel::Info,
            LogComponent::Application("Coordinator"),
            "Received broadcast prediction",
            &format!("target={} content_type={} body={}", message.target, message.content_type, message.body),
        );

        if let Err(e) = self.surface.show_payload(&message.body) {
            get_logger().warn(LogComponent::Application("Coordinator"), &e.to_string());
        }

        let received = self.session.borrow_mut().receive_broadcast(&message.body);
        let series = match received {
            Ok(series) => series,
            Err(e) => {
                get_logger().warn(
                    LogComponent::Application("Coordinator"),
                    &format!("Dropping {}: {}", message.event_type(), e),
                );
                return Err(e);
            }
        };

        self.surface.redraw(&series).inspect_err(|e| {
            get_logger().error(LogComponent::Application("Coordinator"), &format!("Redraw failed: {}", e));
        })?;
        Ok(series)
    }

    /// Unauthorized submissions are dropped before anything is spawned.
    pub fn handle_user_action(&self, action: UserAction) {
        match action {
            UserAction::SubmitComment(comment) => {
                let request = self.session.borrow().comment_request(&comment);
                let request = match request {
                    Ok(request) => request,
                    Err(e) => {
                        get_logger().info(LogComponent::Application("Coordinator"), &e.to_string());
                        return;
                    }
                };
                let this = self.clone();
                self.spawner.spawn(Box::pin(async move {
                    let _ = this.send_logged(request).await;
                }));
            }
        }
    }

    /// Awaitable form of a comment submission
    pub async fn submit_comment(&self, comment: &str) -> PanelResult<String> {
        let request = self.session.borrow().comment_request(comment);
        match request {
            Ok(request) => self.send_logged(request).await,
            Err(e) => {
                get_logger().info(LogComponent::Application("Coordinator"), &e.to_string());
                Err(e)
            }
        }
    }

    /// GET the stored panel state and show it
    pub async fn fetch_state(&self, request: OutboundRequest) -> PanelResult<String> {
        let body = self.send_logged(request).await?;
        self.surface.show_payload(&body)?;
        Ok(body)
    }

    async fn send_logged(&self, request: OutboundRequest) -> PanelResult<String> {
        get_logger().info(
            LogComponent::Application("Coordinator"),
            &format!("Requesting comment sentiment prediction: {} {}", request.method, request.url),
        );
        match self.gateway.send(&request).await {
            Ok(body) => {
                get_logger().info(
                    LogComponent::Application("Coordinator"),
                    &format!("EBS request returned {}", body),
                );
                Ok(body)
            }
            Err(e) => {
                let (status, error) = describe_failure(&e);
                get_logger().error(
                    LogComponent::Application("Coordinator"),
                    &format!("EBS request returned {} ({})", status, error),
                );
                Err(e)
            }
        }
    }

    pub fn is_authorized(&self) -> bool {
        self.session.borrow().is_authorized()
    }

    pub fn history(&self) -> Vec<f64> {
        self.session.borrow().chart().history().to_vec()
    }

    pub fn forecast(&self) -> Vec<f64> {
        self.session.borrow().chart().forecast().as_slice().to_vec()
    }

    pub fn series(&self) -> ChartSeries {
        self.session.borrow().chart().series()
    }

    pub fn with_session<R>(&self, f: impl FnOnce(&PanelSession) -> R) -> R {
        f(&self.session.borrow())
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }
}

fn describe_failure(error: &PanelError) -> (String, String) {
    match error {
        PanelError::Network(NetworkError::HttpStatus { status, status_text }) => {
            (status.to_string(), status_text.clone())
        }
        other => ("error".to_string(), other.to_string()),
    }
}
