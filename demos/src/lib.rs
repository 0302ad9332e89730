//! A scripted mission: a fixed obstacle layout, an agent and an objective.
//!
//! The reports below are what an operator console would print for the two
//! agent queries; the `mission` binary renders them to the terminal.

use covert_core::{Direction, Point, Range};
use covert_obstacles::{
    Camera, Fence, Guard, ObstacleError, ObstacleField, SafeDirections, Sensor,
};
use covert_paths::{Route, SearchConfig};

/// Glyph marking a cell the planned route passes through.
pub const ROUTE_GLYPH: char = '*';

/// A planning scenario.
#[derive(Debug, Clone)]
pub struct Mission {
    pub field: ObstacleField,
    pub agent: Point,
    pub objective: Point,
    /// Map window shown to the operator.
    pub window: Range,
}

impl Mission {
    /// The demo scenario: a compound with a fence line, a guard post, a
    /// motion sensor and a camera watching the north-east corner.
    pub fn compound() -> Result<Self, ObstacleError> {
        let mut field = ObstacleField::new();
        field.push(Fence::new(Point::new(6, 0), Point::new(6, 9))?);
        field.push(Fence::new(Point::new(6, 12), Point::new(14, 12))?);
        field.push(Guard::new(Point::new(3, 4)));
        field.push(Guard::new(Point::new(10, 2)));
        field.push(Sensor::new(Point::new(11, 7), 2.5)?);
        field.push(Camera::new(Point::new(17, 3), Direction::North));

        Ok(Self {
            field,
            agent: Point::new(1, 1),
            objective: Point::new(15, 14),
            window: Range::inclusive(Point::new(0, 0), Point::new(19, 15)),
        })
    }

    /// Search settings for this mission: routes stay inside the map window,
    /// so a walled-off objective ends the search instead of running forever.
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig::new().with_bounds(self.window)
    }

    /// Shortest safe route for the agent inside the window, if any.
    pub fn route(&self) -> Option<Route> {
        self.field
            .find_path_with(self.search_config(), self.agent, self.objective)
    }

    /// The map window with `route` drawn over free cells. The agent and the
    /// objective are marked `A` and `O`.
    pub fn overlay(&self, route: Option<&Route>) -> String {
        let on_route: Vec<Point> = route
            .map(|r| r.points(self.agent).collect())
            .unwrap_or_default();
        let mut out = String::new();
        for p in self.window {
            if p.x == self.window.min.x && p.y > self.window.min.y {
                out.push('\n');
            }
            let glyph = if p == self.agent {
                'A'
            } else if p == self.objective {
                'O'
            } else if on_route.contains(&p) {
                ROUTE_GLYPH
            } else {
                self.field.glyph_at(p)
            };
            out.push(glyph);
        }
        out
    }
}

/// Operator report for the safe-directions query.
pub fn direction_report(field: &ObstacleField, agent: Point) -> String {
    match field.safe_directions(agent) {
        SafeDirections::Compromised => {
            "Agent, your location is compromised. Abort mission.".to_string()
        }
        SafeDirections::Open(dirs) if dirs.is_empty() => {
            "You cannot safely move in any direction. Abort mission.".to_string()
        }
        SafeDirections::Open(dirs) => {
            let letters: String = dirs.iter().map(|d| d.as_char()).collect();
            format!("You can safely take any of the following directions: {letters}")
        }
    }
}

/// Operator report for the route query, searched under `config`.
pub fn path_report(
    field: &ObstacleField,
    config: SearchConfig,
    agent: Point,
    objective: Point,
) -> String {
    if agent == objective {
        return "Agent, you are already at the objective.".to_string();
    }
    if field.is_blocked(objective) {
        return "The objective is blocked by an obstacle and cannot be reached.".to_string();
    }
    match field.find_path_with(config, agent, objective) {
        Some(route) => format!("The following path will take you to the objective:\n{route}"),
        None => "There is no safe path to the objective.".to_string(),
    }
}
