use tracing::{debug, trace};

use crate::collision::{self, CollisionTester, IntersectionData};
use crate::objects::Ball;
use crate::shapes::Polygon;

/// What a ball collided with during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// Index into [`Scene::obstacles`].
    Obstacle(usize),
    /// Index into [`Scene::balls`].
    Ball(usize),
}

/// A collision found and resolved during the last tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Index of the ball that was resolved.
    pub ball: usize,
    pub target: HitTarget,
    /// Intersection as reported before the ball was resolved.
    pub data: IntersectionData,
}

/// All simulation state for one scene: static obstacles and moving balls.
///
/// Obstacles are stored as convex decompositions, so a concave wall can be
/// added as several convex polygons.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    obstacles: Vec<Vec<Polygon>>,
    balls: Vec<Ball>,
    tester: CollisionTester,
    /// Contacts resolved during the last call to [`tick`](Self::tick).
    pub contacts: Vec<Contact>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a static obstacle made of one or more convex parts and returns its index.
    pub fn add_obstacle(&mut self, parts: Vec<Polygon>) -> usize {
        let index = self.obstacles.len();
        self.obstacles.push(parts);
        index
    }

    /// Adds a single convex polygon as an obstacle and returns its index.
    pub fn add_polygon_obstacle(&mut self, polygon: Polygon) -> usize {
        self.add_obstacle(vec![polygon])
    }

    /// Adds a moving ball and returns its index.
    pub fn add_ball(&mut self, ball: Ball) -> usize {
        let index = self.balls.len();
        self.balls.push(ball);
        index
    }

    pub fn obstacles(&self) -> &[Vec<Polygon>] {
        &self.obstacles
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn ball(&self, index: usize) -> Option<&Ball> {
        self.balls.get(index)
    }

    /// First obstacle, in insertion order, that `ball` overlaps.
    pub fn first_obstacle_hit(&self, ball: &Ball) -> Option<(usize, IntersectionData)> {
        self.obstacles.iter().enumerate().find_map(|(index, parts)| {
            self.tester
                .test_bodies(ball.parts(), parts)
                .map(|data| (index, data))
        })
    }

    /// First other ball, in insertion order, that the ball at `index` overlaps.
    pub fn first_ball_hit(&self, index: usize) -> Option<(usize, IntersectionData)> {
        let ball = self.balls.get(index)?;
        self.balls
            .iter()
            .enumerate()
            .filter(|&(other, _)| other != index)
            .find_map(|(other, other_ball)| {
                self.tester
                    .test_polygons(ball.body(), other_ball.body())
                    .map(|data| (other, data))
            })
    }

    /// Advances the scene by one tick and returns the number of collisions resolved.
    ///
    /// Balls are processed in insertion order. Each ball moves a full step,
    /// is tested against the obstacles and then, if none was hit, against the
    /// other balls. Only the first hit is resolved.
    pub fn tick(&mut self) -> usize {
        self.contacts.clear();

        for index in 0..self.balls.len() {
            self.balls[index].advance();

            let hit = self
                .first_obstacle_hit(&self.balls[index])
                .map(|(obstacle, data)| (HitTarget::Obstacle(obstacle), data))
                .or_else(|| {
                    self.first_ball_hit(index)
                        .map(|(other, data)| (HitTarget::Ball(other), data))
                });

            if let Some((target, data)) = hit {
                debug!(
                    ball = index,
                    ?target,
                    normal = ?data.normal,
                    distance = data.distance,
                    "resolving collision"
                );
                collision::resolve(&mut self.balls[index], &data);
                self.contacts.push(Contact {
                    ball: index,
                    target,
                    data,
                });
            }
        }

        trace!(
            balls = self.balls.len(),
            contacts = self.contacts.len(),
            "tick complete"
        );
        self.contacts.len()
    }
}
