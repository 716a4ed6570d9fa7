use leptos::*;

use crate::config::ElementIds;

/// Reactive state shown by the panel markup
#[derive(Clone, Copy)]
pub struct PanelCtx {
    pub status: RwSignal<String>,
}

impl PanelCtx {
    pub fn new() -> Self {
        Self {
            status: create_rw_signal("Waiting for authorization…".to_string()),
        }
    }
}

impl Default for PanelCtx {
    fn default() -> Self {
        Self::new()
    }
}

/// 🦀 Panel markup: prediction text, comment box and chart canvas
#[component]
pub fn PanelView(elements: ElementIds, ctx: PanelCtx) -> impl IntoView {
    view! {
        <style>
            {r#"
            .sentiment-panel {
                font-family: -apple-system, BlinkMacSystemFont, sans-serif;
                display: flex;
                flex-direction: column;
                gap: 8px;
                padding: 10px;
            }
            .sentiment-panel .status {
                font-size: 12px;
                opacity: 0.7;
            }
            .sentiment-panel .comment-row {
                display: flex;
                gap: 6px;
            }
            .sentiment-panel .comment-row input {
                flex: 1;
            }
            "#}
        </style>
        <div class="sentiment-panel">
            <div class="status">{move || ctx.status.get()}</div>
            <div id=elements.prediction.clone()></div>
            <div class="comment-row">
                <input type="text" id=elements.comment_input.clone() placeholder="Say something…"/>
                <button id=elements.send_button.clone()>"Send"</button>
            </div>
            <canvas id=elements.chart_canvas.clone()></canvas>
        </div>
    }
}

/// Render the panel markup into `<body>` for pages that do not ship it
pub fn mount_panel_markup(elements: ElementIds, ctx: PanelCtx) {
    mount_to_body(move || view! { <PanelView elements=elements ctx=ctx/> });
}
