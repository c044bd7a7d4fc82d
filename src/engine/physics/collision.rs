use rapier2d::prelude::*;

/// Collision layers for filtering what objects collide with and what
/// probes can see
///
/// Actors only collide physically with level geometry; the player and
/// enemies pass through each other and interact through probe queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    /// Static platforms and walls
    Ground = 0b0000_0001,

    /// The player character (targetable by enemy attacks)
    Player = 0b0000_0010,

    /// Enemy actors
    Enemy = 0b0000_0100,
}

impl CollisionLayer {
    /// Group bit for this layer
    pub fn group(self) -> Group {
        Group::from_bits_truncate(self as u32)
    }

    /// Convert to rapier2d's InteractionGroups for a collider on this layer
    pub fn to_interaction_groups(self) -> InteractionGroups {
        let filter = match self {
            // Level geometry blocks every actor
            CollisionLayer::Ground => Group::ALL,

            // Actors stand on geometry only
            CollisionLayer::Player | CollisionLayer::Enemy => CollisionLayer::Ground.group(),
        };

        InteractionGroups::new(self.group(), filter)
    }

    /// Query filter that only sees colliders on this layer
    pub fn query_filter(self) -> QueryFilter<'static> {
        QueryFilter::default().groups(InteractionGroups::new(Group::ALL, self.group()))
    }
}
