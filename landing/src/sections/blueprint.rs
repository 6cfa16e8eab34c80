use leptos::prelude::*;

/// Builds an orthogonal connector path: out of the start, one elbow at the
/// horizontal midpoint, into the end.
pub fn orthogonal_path(start_x: f64, start_y: f64, end_x: f64, end_y: f64) -> String {
    let mid_x = start_x + (end_x - start_x) / 2.0;
    format!("M {start_x} {start_y} L {mid_x} {start_y} L {mid_x} {end_y} L {end_x} {end_y}")
}

/// The application architecture diagram drawn in the demo panel.
#[component]
pub fn Blueprint() -> impl IntoView {
    view! {
        <div class="blueprint-figure">
            <svg viewBox="0 0 800 600" xmlns="http://www.w3.org/2000/svg" role="img" aria-label="Application architecture blueprint">
                // Module containers
                <Subgraph x=50 y=50 width=200 height=180 title="App Core" />
                <Subgraph x=300 y=50 width=220 height=180 title="UI Components" />
                <Subgraph x=550 y=50 width=200 height=180 title="Canvas" />
                <Subgraph x=120 y=280 width=160 height=100 title="Services" />
                <Subgraph x=350 y=280 width=180 height=150 title="Internal Libraries" />

                // App Core
                <Node x=70 y=90 width=60 label="App" />
                <Node x=70 y=130 width=80 label="GeminiService" />
                <Node x=70 y=170 width=100 label="BlueprintGenerator" />
                <Node x=180 y=170 width=50 label="types" />

                // UI Components
                <Node x=320 y=90 width=100 label="ConversationPanel" />
                <Node x=320 y=130 width=80 label="InspectorPanel" />
                <Node x=320 y=170 width=60 label="Canvas" />

                // Canvas
                <Node x=570 y=90 width=80 label="BlueprintPanel" />
                <Node x=570 y=130 width=80 label="MindMapPanel" />
                <Node x=570 y=170 width=80 label="PreviewPanel" />

                // Services
                <Node x=140 y=320 width=80 label="GeminiService" />

                // Internal Libraries
                <Node x=370 y=320 width=80 label="BlueprintData" />
                <Node x=370 y=360 width=100 label="MindMapGenerator" />

                // Connectors
                <Connector x1=100.0 y1=120.0 x2=150.0 y2=320.0 />
                <Connector x1=130.0 y1=105.0 x2=320.0 y2=105.0 />
                <Connector x1=380.0 y1=185.0 x2=570.0 y2=105.0 />
                <Connector x1=610.0 y1=120.0 x2=610.0 y2=130.0 />
                <Connector x1=610.0 y1=160.0 x2=610.0 y2=170.0 />
                <Connector x1=170.0 y1=185.0 x2=370.0 y2=335.0 />
                <Connector x1=610.0 y1=160.0 x2=420.0 y2=360.0 />
                <Connector x1=150.0 y1=145.0 x2=180.0 y2=185.0 />
                <Connector x1=220.0 y1=335.0 x2=205.0 y2=200.0 />
            </svg>
        </div>
    }
}

#[component]
fn Subgraph(x: i32, y: i32, width: i32, height: i32, title: &'static str) -> impl IntoView {
    view! {
        <rect
            class="subgraph-box"
            x=x
            y=y
            width=width
            height=height
            rx="12"
            stroke-dasharray="5,5"
        />
        <text class="node-text subgraph-title" x={x + width / 2} y={y + 25} text-anchor="middle">
            {title}
        </text>
    }
}

#[component]
fn Node(x: i32, y: i32, width: i32, label: &'static str) -> impl IntoView {
    view! {
        <rect class="component-box" x=x y=y width=width height="30" rx="6" />
        <text class="node-text" x={x + width / 2} y={y + 19} text-anchor="middle">
            {label}
        </text>
    }
}

#[component]
fn Connector(x1: f64, y1: f64, x2: f64, y2: f64) -> impl IntoView {
    view! {
        <path
            class="connector-line"
            d=orthogonal_path(x1, y1, x2, y2)
            stroke-dasharray="10 5"
            fill="none"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_turns_once_at_the_horizontal_midpoint() {
        assert_eq!(
            orthogonal_path(100.0, 120.0, 150.0, 320.0),
            "M 100 120 L 125 120 L 125 320 L 150 320"
        );
    }

    #[test]
    fn leftward_runs_keep_fractional_midpoints() {
        assert_eq!(
            orthogonal_path(220.0, 335.0, 205.0, 200.0),
            "M 220 335 L 212.5 335 L 212.5 200 L 205 200"
        );
    }

    #[test]
    fn vertical_connectors_collapse_the_elbow() {
        assert_eq!(
            orthogonal_path(610.0, 120.0, 610.0, 130.0),
            "M 610 120 L 610 120 L 610 130 L 610 130"
        );
    }
}
