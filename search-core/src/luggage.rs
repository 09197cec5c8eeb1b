#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BagSize {
    Hand,
    Medium,
    Xxl,
}

impl BagSize {
    pub const ALL: [BagSize; 3] = [BagSize::Hand, BagSize::Medium, BagSize::Xxl];

    pub fn label(&self) -> &'static str {
        match self {
            BagSize::Hand => "Bagaglio a mano",
            BagSize::Medium => "Valigia media",
            BagSize::Xxl => "Valigia XXL",
        }
    }
}

/// Bags to store, one counter per size. Counters never go below zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BagCounts {
    pub hand: u32,
    pub medium: u32,
    pub xxl: u32,
}

impl Default for BagCounts {
    // One medium suitcase is the usual case.
    fn default() -> Self {
        Self {
            hand: 0,
            medium: 1,
            xxl: 0,
        }
    }
}

impl BagCounts {
    pub fn get(&self, size: BagSize) -> u32 {
        match size {
            BagSize::Hand => self.hand,
            BagSize::Medium => self.medium,
            BagSize::Xxl => self.xxl,
        }
    }

    fn slot(&mut self, size: BagSize) -> &mut u32 {
        match size {
            BagSize::Hand => &mut self.hand,
            BagSize::Medium => &mut self.medium,
            BagSize::Xxl => &mut self.xxl,
        }
    }

    pub fn increment(&mut self, size: BagSize) {
        let count = self.slot(size);
        *count = count.saturating_add(1);
    }

    pub fn decrement(&mut self, size: BagSize) {
        let count = self.slot(size);
        *count = count.saturating_sub(1);
    }

    pub fn total(&self) -> u32 {
        self.hand + self.medium + self.xxl
    }
}
