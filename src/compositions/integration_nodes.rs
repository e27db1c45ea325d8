use crate::compositions::palette::{
    HUB_FILL, NEUTRAL_BG, PURPLE_400, TEXT_BRIGHT, TEXT_SECONDARY, purple_wash,
};
use crate::compositions::{Composition, VideoConfig};
use crate::foundation::core::{Canvas, Fps, Point};
use crate::motion::orbit::OrbitLayout;
use crate::scene::model::{
    FontFamily, Gradient, GroupNode, Scene, ShapeNode, TextAnchor, TextNode, TextSpan, stop,
};

/// A satellite service around the hub.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Satellite {
    /// Label drawn under the node.
    pub label: &'static str,
    /// Placement angle in degrees (0 = right, positive = down).
    pub angle: f64,
}

/// Satellites in reveal order.
pub const SATELLITES: [Satellite; 6] = [
    Satellite {
        label: "Twilio",
        angle: -60.0,
    },
    Satellite {
        label: "Vonage",
        angle: -20.0,
    },
    Satellite {
        label: "Telnyx",
        angle: 20.0,
    },
    Satellite {
        label: "Slack",
        angle: 60.0,
    },
    Satellite {
        label: "REST",
        angle: -80.0,
    },
    Satellite {
        label: "WebSocket",
        angle: 80.0,
    },
];

/// Hub label.
pub const HUB_LABEL: &str = "Gladia";

/// Hub-and-spoke diagram: satellites fade in one by one, pulses travel out along the spokes.
#[derive(Clone, Debug)]
pub struct IntegrationNodes {
    config: VideoConfig,
}

impl IntegrationNodes {
    /// Registry id.
    pub const ID: &'static str = "IntegrationNodes";

    /// 560x680 at 30 fps, 300 frames.
    pub fn new() -> Self {
        Self {
            config: VideoConfig {
                canvas: Canvas {
                    width: 560,
                    height: 680,
                },
                fps: Fps { num: 30, den: 1 },
                duration: 300,
            },
        }
    }

    /// Orbit layout centered 10 px below the canvas middle.
    pub fn layout(&self) -> OrbitLayout {
        let c = self.config.canvas.center();
        OrbitLayout::around(Point::new(c.x, c.y + 10.0))
    }
}

impl Default for IntegrationNodes {
    fn default() -> Self {
        Self::new()
    }
}

impl Composition for IntegrationNodes {
    fn id(&self) -> &str {
        Self::ID
    }

    fn video_config(&self) -> VideoConfig {
        self.config
    }

    fn scene(&self, loop_frame: u64) -> Scene {
        let f = loop_frame as f64;
        let layout = self.layout();
        let hub = layout.center;
        let mut scene = Scene::new(self.config.canvas, NEUTRAL_BG);

        let glow = scene.define(Gradient::radial(
            "hub-glow",
            hub,
            100.0,
            vec![
                stop(0.0, PURPLE_400.with_alpha(0.3)),
                stop(1.0, PURPLE_400.with_alpha(0.0)),
            ],
        ));
        scene.push(
            ShapeNode::circle(hub, 100.0)
                .fill(glow)
                .opacity(OrbitLayout::hub_glow(f)),
        );

        let nodes: Vec<_> = SATELLITES
            .iter()
            .enumerate()
            .map(|(i, s)| layout.node(i, s.angle, f))
            .collect();

        for node in &nodes {
            let mut spoke = GroupNode::new()
                .opacity(node.opacity)
                .with(ShapeNode::line(hub, node.pos, purple_wash(0.12), 1.0));
            if let Some(p) = layout.pulse(node, f, self.config.fps) {
                spoke.push(
                    ShapeNode::circle(p.pos, p.radius)
                        .fill(PURPLE_400)
                        .opacity(p.opacity),
                );
            }
            scene.push(spoke);
        }

        for (node, sat) in nodes.iter().zip(SATELLITES.iter()) {
            let i = node.index as f64;
            let group = GroupNode::new()
                .opacity(node.opacity)
                .with(
                    ShapeNode::circle(node.pos, 28.0)
                        .fill(purple_wash(0.06))
                        .stroke(purple_wash(0.15), 1.0),
                )
                .with(
                    ShapeNode::circle(node.pos, 4.0)
                        .fill(PURPLE_400)
                        .opacity(0.6 + (f * 0.05 + i).sin() * 0.3),
                )
                .with(
                    TextNode::new(
                        Point::new(node.pos.x, node.pos.y + 44.0),
                        FontFamily::Sans,
                        11.0,
                        TextSpan::new(sat.label, TEXT_SECONDARY),
                    )
                    .anchor(TextAnchor::Middle)
                    .weight(450)
                    .tracking(11.0 * 0.04),
                );
            scene.push(group);
        }

        scene.push(
            GroupNode::new()
                .with(
                    ShapeNode::circle(hub, 38.0 * OrbitLayout::hub_pulse(f))
                        .stroke(purple_wash(0.2), 1.0),
                )
                .with(
                    ShapeNode::circle(hub, 30.0)
                        .fill(HUB_FILL)
                        .stroke(purple_wash(0.35), 1.5),
                )
                .with(
                    ShapeNode::circle(hub, 8.0)
                        .fill(PURPLE_400)
                        .opacity(0.5 + (f * 0.06).sin() * 0.3),
                )
                .with(
                    TextNode::new(
                        Point::new(hub.x, hub.y + 52.0),
                        FontFamily::Sans,
                        13.0,
                        TextSpan::new(HUB_LABEL, TEXT_BRIGHT),
                    )
                    .anchor(TextAnchor::Middle)
                    .weight(500)
                    .tracking(13.0 * 0.06),
                ),
        );
        scene
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compositions/integration_nodes.rs"]
mod tests;
