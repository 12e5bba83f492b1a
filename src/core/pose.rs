use super::constants::*;
use glam::Vec3;

/// Fixed pose of the listening head.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListenerPose {
    pub position: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
}

/// The mannequin never moves, so the listener is a constant.
pub const LISTENER_POSE: ListenerPose = ListenerPose {
    position: LISTENER_POSITION,
    forward: LISTENER_FORWARD,
    up: LISTENER_UP,
};

/// Speaker position, always on the ground plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmitterPose {
    pub position: Vec3,
}

impl EmitterPose {
    #[inline]
    pub fn on_ground(x: f32, z: f32) -> Self {
        Self {
            position: Vec3::new(x, GROUND_Y, z),
        }
    }

    /// Drop any height from a world point onto the ground plane.
    #[inline]
    pub fn from_world(p: Vec3) -> Self {
        Self::on_ground(p.x, p.z)
    }
}

impl Default for EmitterPose {
    fn default() -> Self {
        Self::from_world(SPEAKER_START)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanningModel {
    Hrtf,
    EqualPower,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceModel {
    Linear,
    Inverse,
    Exponential,
}

/// Static panner/gain configuration applied to every new session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PannerSettings {
    pub panning_model: PanningModel,
    pub distance_model: DistanceModel,
    pub ref_distance: f64,
    pub max_distance: f64,
    pub rolloff_factor: f64,
    pub cone_inner_angle: f64,
    pub cone_outer_angle: f64,
    pub cone_outer_gain: f64,
    pub gain: f32,
}

impl Default for PannerSettings {
    fn default() -> Self {
        Self {
            panning_model: PanningModel::Hrtf,
            distance_model: DistanceModel::Inverse,
            ref_distance: PANNER_REF_DISTANCE,
            max_distance: PANNER_MAX_DISTANCE,
            rolloff_factor: PANNER_ROLLOFF,
            cone_inner_angle: PANNER_CONE_INNER_DEG,
            cone_outer_angle: PANNER_CONE_OUTER_DEG,
            cone_outer_gain: PANNER_CONE_OUTER_GAIN,
            gain: SESSION_GAIN,
        }
    }
}
