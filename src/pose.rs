//! Body landmarks and the pose detection seam
//!
//! The pose model is a black box: given a frame and a timestamp it returns
//! at most one person's landmarks in normalized `[0, 1]` coordinates.
//! Landmarks carry no identity across frames.

use glam::{UVec2, Vec2};
use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_FPS;
use crate::frame::Frame;

/// Number of landmarks the pose model reports per person
pub const POSE_LANDMARK_COUNT: usize = 33;

/// Named joints the game cares about, with their pose model indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    LeftWrist,
    RightWrist,
    LeftPinky,
    RightPinky,
    LeftIndex,
    RightIndex,
    LeftThumb,
    RightThumb,
    LeftAnkle,
    RightAnkle,
    LeftFootIndex,
    RightFootIndex,
}

impl Joint {
    pub const ALL: [Joint; 12] = [
        Joint::LeftWrist,
        Joint::RightWrist,
        Joint::LeftPinky,
        Joint::RightPinky,
        Joint::LeftIndex,
        Joint::RightIndex,
        Joint::LeftThumb,
        Joint::RightThumb,
        Joint::LeftAnkle,
        Joint::RightAnkle,
        Joint::LeftFootIndex,
        Joint::RightFootIndex,
    ];

    /// Index into the pose model's landmark list
    pub fn index(self) -> usize {
        match self {
            Joint::LeftWrist => 15,
            Joint::RightWrist => 16,
            Joint::LeftPinky => 17,
            Joint::RightPinky => 18,
            Joint::LeftIndex => 19,
            Joint::RightIndex => 20,
            Joint::LeftThumb => 21,
            Joint::RightThumb => 22,
            Joint::LeftAnkle => 27,
            Joint::RightAnkle => 28,
            Joint::LeftFootIndex => 31,
            Joint::RightFootIndex => 32,
        }
    }

    /// Which body group the joint belongs to (for marker colors)
    pub fn group(self) -> JointGroup {
        match self {
            Joint::LeftWrist | Joint::LeftPinky | Joint::LeftIndex | Joint::LeftThumb => {
                JointGroup::LeftHand
            }
            Joint::RightWrist | Joint::RightPinky | Joint::RightIndex | Joint::RightThumb => {
                JointGroup::RightHand
            }
            _ => JointGroup::Feet,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JointGroup {
    LeftHand,
    RightHand,
    Feet,
}

/// The joints that act as hands and feet during play
pub const RIGHT_HAND: Joint = Joint::RightIndex;
pub const LEFT_HAND: Joint = Joint::LeftIndex;
pub const RIGHT_FOOT: Joint = Joint::RightFootIndex;
pub const LEFT_FOOT: Joint = Joint::LeftFootIndex;

/// One detected person, landmarks in normalized frame coordinates.
///
/// Indexed by the pose model's landmark numbering; a `None` slot (or a list
/// too short to reach the index) means the joint wasn't reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonLandmarks {
    pub points: Vec<Option<Vec2>>,
}

impl PersonLandmarks {
    /// Landmarks as a pose model reports them, every slot filled
    pub fn new(points: Vec<Vec2>) -> Self {
        Self {
            points: points.into_iter().map(Some).collect(),
        }
    }

    /// Full-size landmark list with only the given joints present
    pub fn from_joints(joints: &[(Joint, Vec2)]) -> Self {
        let mut points = vec![None; POSE_LANDMARK_COUNT];
        for &(joint, pos) in joints {
            points[joint.index()] = Some(pos);
        }
        Self { points }
    }

    /// Normalized position of a joint, if the model reported it
    pub fn get(&self, joint: Joint) -> Option<Vec2> {
        self.points.get(joint.index()).copied().flatten()
    }

    /// Pixel position of a joint for a frame of `size`
    pub fn pixel(&self, joint: Joint, size: UVec2) -> Option<Vec2> {
        self.get(joint).map(|n| to_pixels(n, size))
    }
}

/// Scale a normalized point to whole pixels
#[inline]
pub fn to_pixels(normalized: Vec2, size: UVec2) -> Vec2 {
    (normalized * size.as_vec2()).trunc()
}

/// Hand and foot positions for one frame, in pixels. Any of them may be
/// missing; a missing joint only disables the catches that depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BodyPoints {
    pub right_hand: Option<Vec2>,
    pub left_hand: Option<Vec2>,
    pub right_foot: Option<Vec2>,
    pub left_foot: Option<Vec2>,
}

impl BodyPoints {
    pub fn from_landmarks(person: Option<&PersonLandmarks>, size: UVec2) -> Self {
        let Some(person) = person else {
            return Self::default();
        };
        Self {
            right_hand: person.pixel(RIGHT_HAND, size),
            left_hand: person.pixel(LEFT_HAND, size),
            right_foot: person.pixel(RIGHT_FOOT, size),
            left_foot: person.pixel(LEFT_FOOT, size),
        }
    }

    /// The single menu pointer: right hand, else left hand
    pub fn pointer(&self) -> Option<Vec2> {
        self.right_hand.or(self.left_hand)
    }
}

/// Pose detection in streaming mode.
///
/// Implementations may keep temporal state keyed on the timestamp, so callers
/// must pass strictly increasing timestamps at a steady cadence.
pub trait PoseFrameSource {
    fn detect(&mut self, frame: &Frame, timestamp_ms: u64) -> Option<PersonLandmarks>;
}

/// Monotonic detection timestamps, one step per captured frame.
///
/// Threaded through every menu and every session for the whole program run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseTimeline {
    next_ms: u64,
    frame_ms: u64,
}

impl PoseTimeline {
    /// Start at 0 ms for a camera reporting `fps` (0 = unknown)
    pub fn new(fps: f64) -> Self {
        let fps = if fps > 0.0 { fps } else { DEFAULT_FPS };
        // At least 1 ms so timestamps always increase
        let frame_ms = ((1000.0 / fps) as u64).max(1);
        Self { next_ms: 0, frame_ms }
    }

    /// Timestamp for the current frame; advances the timeline
    pub fn stamp(&mut self) -> u64 {
        let ts = self.next_ms;
        self.next_ms += self.frame_ms;
        ts
    }

    /// Timestamp the next frame will get
    pub fn peek(&self) -> u64 {
        self.next_ms
    }

    pub fn frame_ms(&self) -> u64 {
        self.frame_ms
    }
}
