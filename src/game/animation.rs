// Presentation-facing animation data
//
// The controllers never read anything back from here. Parameters are
// fire-and-forget values for whatever draws the actors, and `AttackClip`
// stands in for the animation events that tell an enemy when its swing
// connects and when it is over.

/// Per-tick animator parameters for the player
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerAnimation {
    /// Animation for the current motion state
    pub clip: &'static str,
    pub grounded: bool,
    pub y_velocity: f32,
    /// Absolute horizontal speed
    pub speed: f32,
    pub dashing: bool,
    pub wall_sliding: bool,
    pub sliding: bool,
    /// 1.0 = facing right, -1.0 = facing left
    pub facing: f32,
}

/// Per-tick animator parameters for an enemy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyAnimation {
    /// Horizontal speed, frozen while an attack plays
    pub speed: f32,
    pub facing: f32,
    pub attacking: bool,
}

/// Cue emitted by an attack clip as it plays
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipCue {
    /// The swing connects; call `deal_damage`
    Hit,
    /// The clip finished; call `end_attack`
    End,
}

/// One-shot attack animation with a hit frame
#[derive(Debug, Clone)]
pub struct AttackClip {
    /// Seconds from start until the hit frame
    hit_time: f32,
    /// Total clip length in seconds
    length: f32,
    /// Playback position; `None` when not playing
    elapsed: Option<f32>,
    /// Hit cue already emitted for this playback
    hit_fired: bool,
}

impl AttackClip {
    /// Create a clip from frame counts at a frame rate
    pub fn from_frames(hit_frame: usize, frame_count: usize, fps: f32) -> Self {
        let frame_duration = 1.0 / fps;
        Self {
            hit_time: hit_frame as f32 * frame_duration,
            length: frame_count as f32 * frame_duration,
            elapsed: None,
            hit_fired: false,
        }
    }

    /// Start playing from the beginning
    pub fn play(&mut self) {
        self.elapsed = Some(0.0);
        self.hit_fired = false;
    }

    /// Stop without emitting further cues
    pub fn stop(&mut self) {
        self.elapsed = None;
    }

    pub fn is_playing(&self) -> bool {
        self.elapsed.is_some()
    }

    pub fn total_duration(&self) -> f32 {
        self.length
    }

    /// Advance playback and return the cues crossed this step
    pub fn update(&mut self, dt: f32) -> Vec<ClipCue> {
        let Some(before) = self.elapsed else {
            return Vec::new();
        };

        let after = before + dt;
        let mut cues = Vec::new();

        // A hit on frame 0 fires on the first update
        if !self.hit_fired && after >= self.hit_time {
            self.hit_fired = true;
            cues.push(ClipCue::Hit);
        }

        if after >= self.length {
            cues.push(ClipCue::End);
            self.elapsed = None;
        } else {
            self.elapsed = Some(after);
        }

        cues
    }
}

impl Default for AttackClip {
    /// Eight frame swing at 12 FPS, connecting on frame 4
    fn default() -> Self {
        Self::from_frames(4, 8, 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_clip_emits_nothing() {
        let mut clip = AttackClip::default();
        assert!(clip.update(1.0).is_empty());
        assert!(!clip.is_playing());
    }

    #[test]
    fn test_hit_then_end() {
        let mut clip = AttackClip::from_frames(2, 4, 8.0); // hit at 0.25, end at 0.5
        clip.play();

        assert!(clip.update(0.125).is_empty());
        assert_eq!(clip.update(0.125), vec![ClipCue::Hit]);
        assert!(clip.update(0.125).is_empty());
        assert_eq!(clip.update(0.125), vec![ClipCue::End]);
        assert!(!clip.is_playing());
    }

    #[test]
    fn test_long_step_emits_both_in_order() {
        let mut clip = AttackClip::from_frames(2, 4, 8.0);
        clip.play();
        assert_eq!(clip.update(1.0), vec![ClipCue::Hit, ClipCue::End]);
    }

    #[test]
    fn test_hit_fires_once() {
        let mut clip = AttackClip::from_frames(1, 8, 8.0);
        clip.play();
        let hits = (0..16)
            .flat_map(|_| clip.update(0.0625))
            .filter(|cue| *cue == ClipCue::Hit)
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_hit_on_first_frame() {
        let mut clip = AttackClip::from_frames(0, 4, 8.0);
        clip.play();
        assert_eq!(clip.update(0.125), vec![ClipCue::Hit]);
        assert!(clip.update(0.125).is_empty());
        assert!(clip.update(0.125).is_empty());
        assert_eq!(clip.update(0.125), vec![ClipCue::End]);
    }

    #[test]
    fn test_replay_fires_hit_again() {
        let mut clip = AttackClip::from_frames(0, 2, 8.0);
        clip.play();
        assert_eq!(clip.update(1.0), vec![ClipCue::Hit, ClipCue::End]);
        clip.play();
        assert_eq!(clip.update(0.125), vec![ClipCue::Hit]);
    }

    #[test]
    fn test_stop_cancels_cues() {
        let mut clip = AttackClip::default();
        clip.play();
        clip.stop();
        assert!(clip.update(clip.total_duration()).is_empty());
    }
}
