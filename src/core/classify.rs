use crate::domain::model::{BucketTable, ChangeBucket, ClassifiedRow};

/// Bucket for a pair of "same" flags; `None` when nothing changed.
pub fn bucket_for(company_same: bool, title_same: bool) -> Option<ChangeBucket> {
    match (company_same, title_same) {
        (true, false) => Some(ChangeBucket::NewRoleSameCompany),
        (false, true) => Some(ChangeBucket::SameRoleNewCompany),
        (false, false) => Some(ChangeBucket::DifferentRoleAndCompany),
        (true, true) => None,
    }
}

/// Output row for `bucket`, in the order of [`ChangeBucket::columns`].
/// Old values come from Bullhorn, new values from LinkedIn.
pub fn project(bucket: ChangeBucket, row: &ClassifiedRow) -> Vec<String> {
    let pair = &row.pair;
    match bucket {
        ChangeBucket::NewRoleSameCompany => vec![
            pair.anchor_name.clone(),
            pair.company_b.clone(),
            pair.title_b.clone(),
            pair.title_a.clone(),
        ],
        ChangeBucket::SameRoleNewCompany => vec![
            pair.anchor_name.clone(),
            pair.company_b.clone(),
            pair.company_a.clone(),
            pair.title_b.clone(),
        ],
        ChangeBucket::DifferentRoleAndCompany => vec![
            pair.anchor_name.clone(),
            pair.company_b.clone(),
            pair.company_a.clone(),
            pair.title_b.clone(),
            pair.title_a.clone(),
        ],
    }
}

#[derive(Debug, Clone)]
pub struct Classification {
    pub new_role_same_company: BucketTable,
    pub same_role_new_company: BucketTable,
    pub different_role_and_company: BucketTable,
    pub unchanged: usize,
}

impl Classification {
    fn new() -> Self {
        Self {
            new_role_same_company: BucketTable::new(ChangeBucket::NewRoleSameCompany),
            same_role_new_company: BucketTable::new(ChangeBucket::SameRoleNewCompany),
            different_role_and_company: BucketTable::new(ChangeBucket::DifferentRoleAndCompany),
            unchanged: 0,
        }
    }

    fn table_mut(&mut self, bucket: ChangeBucket) -> &mut BucketTable {
        match bucket {
            ChangeBucket::NewRoleSameCompany => &mut self.new_role_same_company,
            ChangeBucket::SameRoleNewCompany => &mut self.same_role_new_company,
            ChangeBucket::DifferentRoleAndCompany => &mut self.different_role_and_company,
        }
    }
}

/// Distributes rows over the three buckets, keeping input order within each.
pub fn classify<I>(rows: I) -> Classification
where
    I: IntoIterator<Item = ClassifiedRow>,
{
    let mut classification = Classification::new();

    for row in rows {
        match bucket_for(row.company_same, row.title_same) {
            Some(bucket) => {
                let projected = project(bucket, &row);
                classification.table_mut(bucket).rows.push(projected);
            }
            None => classification.unchanged += 1,
        }
    }

    tracing::debug!(
        "Classified: {} new role, {} new company, {} both changed, {} unchanged",
        classification.new_role_same_company.len(),
        classification.same_role_new_company.len(),
        classification.different_role_and_company.len(),
        classification.unchanged
    );

    classification
}
