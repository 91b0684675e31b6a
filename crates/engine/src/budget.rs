//! Budget goals and their allocation.

use crate::{EngineError, MoneyCents, ResultEngine, money::out_of_range};

/// Monthly income split into four spending buckets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BudgetGoals {
    pub monthly_income: MoneyCents,
    pub debt_payments: MoneyCents,
    pub savings: MoneyCents,
    pub investments: MoneyCents,
    pub discretionary: MoneyCents,
}

impl Default for BudgetGoals {
    fn default() -> Self {
        Self {
            monthly_income: MoneyCents::dollars(5_200),
            debt_payments: MoneyCents::dollars(800),
            savings: MoneyCents::dollars(1_000),
            investments: MoneyCents::dollars(600),
            discretionary: MoneyCents::dollars(2_800),
        }
    }
}

/// One of the four spending buckets of [`BudgetGoals`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Bucket {
    DebtPayments,
    Savings,
    Investments,
    Discretionary,
}

impl Bucket {
    pub const ALL: [Bucket; 4] = [
        Bucket::DebtPayments,
        Bucket::Savings,
        Bucket::Investments,
        Bucket::Discretionary,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::DebtPayments => "Debt payments",
            Self::Savings => "Savings",
            Self::Investments => "Investments",
            Self::Discretionary => "Discretionary",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AllocationStatus {
    FullyAllocated,
    /// Income left over after all buckets.
    Unallocated(MoneyCents),
    /// Amount by which the buckets exceed income.
    OverBudget(MoneyCents),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Allocation {
    pub total_allocated: MoneyCents,
    /// `monthly_income - total_allocated`, signed.
    pub remaining: MoneyCents,
    pub status: AllocationStatus,
}

impl BudgetGoals {
    pub fn bucket(&self, bucket: Bucket) -> MoneyCents {
        match bucket {
            Bucket::DebtPayments => self.debt_payments,
            Bucket::Savings => self.savings,
            Bucket::Investments => self.investments,
            Bucket::Discretionary => self.discretionary,
        }
    }

    /// Share of `bucket` in the monthly income, in whole percent.
    pub fn share(&self, bucket: Bucket) -> u16 {
        self.bucket(bucket).percent_of(self.monthly_income)
    }

    /// Rejects negative amounts and buckets whose total does not fit in
    /// cents.
    pub fn validate(&self) -> ResultEngine<()> {
        let fields = [
            ("monthly_income", self.monthly_income),
            ("debt_payments", self.debt_payments),
            ("savings", self.savings),
            ("investments", self.investments),
            ("discretionary", self.discretionary),
        ];
        if let Some((name, _)) = fields.iter().find(|(_, amount)| amount.is_negative()) {
            return Err(EngineError::InvalidAmount(format!(
                "{name} must not be negative"
            )));
        }
        self.allocation().map(|_| ())
    }

    /// Totals the buckets against the monthly income.
    ///
    /// Fails with [`EngineError::InvalidAmount`] when a total overflows.
    pub fn allocation(&self) -> ResultEngine<Allocation> {
        let total_allocated = MoneyCents::checked_sum(Bucket::ALL.map(|b| self.bucket(b)))
            .ok_or_else(out_of_range)?;
        let remaining = self
            .monthly_income
            .checked_sub(total_allocated)
            .ok_or_else(out_of_range)?;
        let status = if remaining.is_zero() {
            AllocationStatus::FullyAllocated
        } else if remaining.is_positive() {
            AllocationStatus::Unallocated(remaining)
        } else {
            let overage = MoneyCents::ZERO
                .checked_sub(remaining)
                .ok_or_else(out_of_range)?;
            AllocationStatus::OverBudget(overage)
        };
        Ok(Allocation {
            total_allocated,
            remaining,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_fully_allocated() {
        let allocation = BudgetGoals::default().allocation().unwrap();
        assert_eq!(allocation.total_allocated, MoneyCents::dollars(5_200));
        assert_eq!(allocation.remaining, MoneyCents::ZERO);
        assert_eq!(allocation.status, AllocationStatus::FullyAllocated);
    }

    #[test]
    fn leftover_income_is_unallocated() {
        let goals = BudgetGoals {
            discretionary: MoneyCents::dollars(2_500),
            ..BudgetGoals::default()
        };
        assert_eq!(
            goals.allocation().unwrap().status,
            AllocationStatus::Unallocated(MoneyCents::dollars(300))
        );
    }

    #[test]
    fn excess_is_reported_as_positive_overage() {
        let goals = BudgetGoals {
            monthly_income: MoneyCents::dollars(5_000),
            ..BudgetGoals::default()
        };
        let allocation = goals.allocation().unwrap();
        assert_eq!(allocation.remaining, MoneyCents::dollars(-200));
        assert_eq!(
            allocation.status,
            AllocationStatus::OverBudget(MoneyCents::dollars(200))
        );
    }

    #[test]
    fn one_cent_off_is_not_fully_allocated() {
        let goals = BudgetGoals {
            savings: MoneyCents::new(100_001),
            ..BudgetGoals::default()
        };
        assert_eq!(
            goals.allocation().unwrap().status,
            AllocationStatus::OverBudget(MoneyCents::new(1))
        );
    }

    #[test]
    fn shares_follow_income() {
        let goals = BudgetGoals::default();
        assert_eq!(goals.share(Bucket::Discretionary), 54);
        let broke = BudgetGoals {
            monthly_income: MoneyCents::ZERO,
            ..goals
        };
        assert_eq!(broke.share(Bucket::Savings), 0);
    }

    #[test]
    fn negative_bucket_is_rejected() {
        let goals = BudgetGoals {
            investments: MoneyCents::new(-1),
            ..BudgetGoals::default()
        };
        assert!(matches!(goals.validate(), Err(EngineError::InvalidAmount(_))));
    }

    #[test]
    fn bucket_total_beyond_cents_range_is_rejected() {
        let goals = BudgetGoals {
            monthly_income: MoneyCents::ZERO,
            debt_payments: MoneyCents::new(i64::MAX),
            savings: MoneyCents::new(1),
            investments: MoneyCents::ZERO,
            discretionary: MoneyCents::ZERO,
        };
        let out_of_range = EngineError::InvalidAmount("total out of range".to_string());
        assert_eq!(goals.allocation(), Err(out_of_range));
        assert!(matches!(goals.validate(), Err(EngineError::InvalidAmount(_))));
    }

    #[test]
    fn largest_fitting_goals_still_allocate() {
        let goals = BudgetGoals {
            monthly_income: MoneyCents::ZERO,
            debt_payments: MoneyCents::new(i64::MAX),
            savings: MoneyCents::ZERO,
            investments: MoneyCents::ZERO,
            discretionary: MoneyCents::ZERO,
        };
        assert!(goals.validate().is_ok());
        let allocation = goals.allocation().unwrap();
        assert_eq!(allocation.remaining, MoneyCents::new(-i64::MAX));
        assert_eq!(
            allocation.status,
            AllocationStatus::OverBudget(MoneyCents::new(i64::MAX))
        );

        let income_only = BudgetGoals {
            monthly_income: MoneyCents::new(i64::MAX),
            debt_payments: MoneyCents::ZERO,
            ..goals
        };
        assert_eq!(
            income_only.allocation().unwrap().status,
            AllocationStatus::Unallocated(MoneyCents::new(i64::MAX))
        );
    }
}
