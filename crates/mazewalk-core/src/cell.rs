//! The [`Cell`] type — one grid position with walkability, a weight class
//! and per-search traversal state.

use glam::Vec2;

/// Weight class of a walkable cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostLevel {
    /// Level 0, weight 1.
    #[default]
    Normal,
    /// Level 1, weight 4.
    High,
}

impl CostLevel {
    /// Cost of stepping into a cell of this class.
    #[inline]
    pub const fn weight(self) -> u32 {
        match self {
            Self::Normal => 1,
            Self::High => 4,
        }
    }

    /// Numeric level (0 or 1).
    #[inline]
    pub const fn level(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::High => 1,
        }
    }

    /// The next level in the `Normal -> High -> Normal` cycle.
    #[inline]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::High,
            Self::High => Self::Normal,
        }
    }
}

impl From<CostLevel> for u8 {
    fn from(c: CostLevel) -> Self {
        c.level()
    }
}

/// A single grid cell.
///
/// `walkable`, `cost_level` and `world` persist for the lifetime of the
/// grid. Everything else belongs to the current search and is cleared by
/// [`Cell::reset`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub walkable: bool,
    pub cost_level: CostLevel,
    /// Centre of the cell in world space.
    pub world: Vec2,
    pub visited: bool,
    pub on_path: bool,
    /// Flat index of the parent cell in the owning grid.
    pub parent: Option<usize>,
    pub g_cost: f32,
    pub h_cost: f32,
}

impl Cell {
    /// Create a fresh cell with no search state.
    pub fn new(walkable: bool, world: Vec2) -> Self {
        Self {
            walkable,
            cost_level: CostLevel::Normal,
            world,
            visited: false,
            on_path: false,
            parent: None,
            g_cost: 0.0,
            h_cost: 0.0,
        }
    }

    /// Cost of stepping into this cell.
    #[inline]
    pub fn weight(&self) -> u32 {
        self.cost_level.weight()
    }

    /// `g_cost + h_cost`.
    #[inline]
    pub fn f_cost(&self) -> f32 {
        self.g_cost + self.h_cost
    }

    /// Clear per-search state. Walkability and cost level are kept.
    pub fn reset(&mut self) {
        self.visited = false;
        self.on_path = false;
        self.parent = None;
        self.g_cost = 0.0;
        self.h_cost = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights() {
        assert_eq!(CostLevel::Normal.weight(), 1);
        assert_eq!(CostLevel::High.weight(), 4);
        assert_eq!(u8::from(CostLevel::High), 1);
    }

    #[test]
    fn toggle_is_two_cycle() {
        for c in [CostLevel::Normal, CostLevel::High] {
            assert_ne!(c.toggled(), c);
            assert_eq!(c.toggled().toggled(), c);
        }
    }

    #[test]
    fn reset_keeps_persistent_fields() {
        let mut c = Cell::new(true, Vec2::new(1.5, 2.5));
        c.cost_level = CostLevel::High;
        c.visited = true;
        c.on_path = true;
        c.parent = Some(3);
        c.g_cost = 7.0;
        c.h_cost = 2.0;
        assert_eq!(c.f_cost(), 9.0);

        c.reset();
        assert!(c.walkable);
        assert_eq!(c.cost_level, CostLevel::High);
        assert_eq!(c.world, Vec2::new(1.5, 2.5));
        assert!(!c.visited && !c.on_path);
        assert_eq!(c.parent, None);
        assert_eq!(c.f_cost(), 0.0);
    }
}
