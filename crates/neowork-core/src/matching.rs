//! Matching engine — scores and ranks candidates against a job opening.
//!
//! The score is the Jaccard similarity of the job's required skills and the
//! candidate's skills, as a percentage rounded to one decimal place. Nothing
//! here holds state; every call re-derives its result from the records it is
//! given.

use serde::Serialize;

use crate::{
  Error, Result,
  record::{Job, JobId, User},
  skill::SkillSet,
  store::RecordStore,
};

/// Compatibility of two skill sets in `[0.0, 100.0]`.
///
/// Returns `0.0` when either set is empty. Symmetric in its arguments.
pub fn compute_score(required: &SkillSet, candidate: &SkillSet) -> f64 {
  if required.is_empty() || candidate.is_empty() {
    return 0.0;
  }
  let shared = required.intersection_len(candidate) as f64;
  let total = required.union_len(candidate) as f64;
  round_to_tenth(shared / total * 100.0)
}

/// Exact halves go to the even neighbour, so `6.25` becomes `6.2`.
fn round_to_tenth(pct: f64) -> f64 { (pct * 10.0).round_ties_even() / 10.0 }

// ─── Ranking ─────────────────────────────────────────────────────────────────

/// A user paired with their compatibility score for one job.
#[derive(Debug, Clone, Serialize)]
pub struct RankedCandidate {
  pub score: f64,
  pub user:  User,
}

/// Score every user against `job` and return the compatible ones, best first.
///
/// Users scoring `0.0` are dropped. Equal scores keep the order of `users`;
/// stores list users in registration order, so ties rank the earlier
/// registration first.
pub fn rank_candidates(job: &Job, users: &[User]) -> Vec<RankedCandidate> {
  let mut ranked: Vec<RankedCandidate> = users
    .iter()
    .filter_map(|user| {
      let score = compute_score(&job.required_skills, &user.skills);
      (score > 0.0).then(|| RankedCandidate {
        score,
        user: user.clone(),
      })
    })
    .collect();

  // `sort_by` is stable.
  ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
  ranked
}

// ─── Store-backed report ─────────────────────────────────────────────────────

/// Everything the "view candidates" screen shows for one job.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateReport {
  pub job:          Job,
  pub company_name: String,
  /// Empty when nobody is compatible.
  pub candidates:   Vec<RankedCandidate>,
}

/// Resolve `job_id` in `store` and rank all registered users against it.
pub fn candidates_for_job<S: RecordStore>(
  store: &S,
  job_id: &JobId,
) -> Result<CandidateReport> {
  let job = store
    .get_job(job_id)
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or_else(|| Error::JobNotFound(job_id.clone()))?;

  let company = store
    .get_company(&job.company_id)
    .map_err(|e| Error::Store(Box::new(e)))?
    .ok_or_else(|| Error::CompanyNotFound(job.company_id.clone()))?;

  let users = store.list_users().map_err(|e| Error::Store(Box::new(e)))?;
  let candidates = rank_candidates(&job, &users);

  Ok(CandidateReport {
    job,
    company_name: company.name,
    candidates,
  })
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use proptest::prelude::*;

  use super::*;
  use crate::record::{CompanyId, Handle};

  fn skills(raw: &str) -> SkillSet { SkillSet::parse(raw) }

  fn user(handle: &str, raw_skills: &str) -> User {
    User {
      handle:     Handle::parse(handle).unwrap(),
      full_name:  handle.to_uppercase(),
      age:        "30".into(),
      area:       "engineering".into(),
      skills:     skills(raw_skills),
      purpose:    "build things".into(),
      created_at: Utc::now(),
    }
  }

  fn job(raw_skills: &str) -> Job {
    Job {
      job_id:          JobId::parse("J001").unwrap(),
      company_id:      CompanyId::parse("C001").unwrap(),
      title:           "Data Analyst".into(),
      description:     "Crunch numbers".into(),
      required_skills: skills(raw_skills),
      created_at:      Utc::now(),
    }
  }

  // ─── compute_score ─────────────────────────────────────────────────────

  #[test]
  fn partial_overlap_is_intersection_over_union() {
    let score = compute_score(&skills("python, sql"), &skills("python, sql, excel"));
    assert_eq!(score, 66.7);
  }

  #[test]
  fn half_overlap() {
    let score = compute_score(&skills("python, sql"), &skills("python, excel, sql, java"));
    assert_eq!(score, 50.0);
  }

  #[test]
  fn identical_sets_score_full() {
    assert_eq!(compute_score(&skills("go, rust"), &skills("Rust, GO")), 100.0);
  }

  #[test]
  fn disjoint_sets_score_zero() {
    assert_eq!(compute_score(&skills("python, sql"), &skills("java")), 0.0);
  }

  #[test]
  fn empty_side_scores_zero() {
    assert_eq!(compute_score(&SkillSet::new(), &skills("python")), 0.0);
    assert_eq!(compute_score(&skills("python"), &SkillSet::new()), 0.0);
    assert_eq!(compute_score(&SkillSet::new(), &SkillSet::new()), 0.0);
  }

  #[test]
  fn rounds_to_one_decimal() {
    assert_eq!(compute_score(&skills("a"), &skills("a, b, c")), 33.3);
    assert_eq!(compute_score(&skills("a, b"), &skills("a, b, c")), 66.7);
  }

  #[test]
  fn exact_halves_round_to_even() {
    let required: SkillSet = (0..16).map(|i| format!("s{i}")).collect();
    let one: SkillSet = ["s0"].into_iter().collect();
    let five: SkillSet = (0..5).map(|i| format!("s{i}")).collect();
    assert_eq!(compute_score(&required, &one), 6.2);
    assert_eq!(compute_score(&required, &five), 31.2);
    assert_eq!(compute_score(&five, &required), 31.2);
  }

  // ─── rank_candidates ───────────────────────────────────────────────────

  #[test]
  fn zero_scores_are_excluded() {
    let users = vec![user("ana", "python, sql, excel"), user("bruno", "java")];
    let ranked = rank_candidates(&job("python, sql"), &users);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].user.handle.as_str(), "ana");
    assert_eq!(ranked[0].score, 66.7);
  }

  #[test]
  fn sorted_best_first() {
    let users = vec![
      user("low", "go, c, java, python"),
      user("high", "go, rust"),
      user("mid", "go, rust, c"),
    ];
    let ranked = rank_candidates(&job("go, rust"), &users);
    let order: Vec<_> = ranked.iter().map(|c| c.user.handle.as_str()).collect();
    assert_eq!(order, ["high", "mid", "low"]);
    assert_eq!(ranked[0].score, 100.0);
  }

  #[test]
  fn ties_keep_registration_order() {
    let users = vec![
      user("first", "go, java"),
      user("best", "go, rust"),
      user("second", "rust, java"),
      user("third", "go, c"),
    ];
    let ranked = rank_candidates(&job("go, rust"), &users);
    let order: Vec<_> = ranked.iter().map(|c| c.user.handle.as_str()).collect();
    assert_eq!(order, ["best", "first", "second", "third"]);
  }

  #[test]
  fn empty_requirements_rank_nobody() {
    let users = vec![user("ana", "python")];
    assert!(rank_candidates(&job(""), &users).is_empty());
  }

  #[test]
  fn no_users_rank_nobody() {
    assert!(rank_candidates(&job("python"), &[]).is_empty());
  }

  // ─── Properties ────────────────────────────────────────────────────────

  fn skill_set() -> impl Strategy<Value = SkillSet> {
    prop::collection::vec("[a-f]{1,2}", 0..8).prop_map(|tags| tags.into_iter().collect())
  }

  fn non_empty_skill_set() -> impl Strategy<Value = SkillSet> {
    prop::collection::vec("[a-f]{1,2}", 1..8).prop_map(|tags| tags.into_iter().collect())
  }

  proptest! {
    #[test]
    fn score_is_bounded_and_symmetric(a in skill_set(), b in skill_set()) {
      let ab = compute_score(&a, &b);
      prop_assert!((0.0..=100.0).contains(&ab));
      prop_assert_eq!(ab, compute_score(&b, &a));
    }

    #[test]
    fn self_score_is_full(a in non_empty_skill_set()) {
      prop_assert_eq!(compute_score(&a, &a), 100.0);
    }

    #[test]
    fn disjoint_score_is_zero(a in skill_set(), b in skill_set()) {
      if a.intersection_len(&b) == 0 {
        prop_assert_eq!(compute_score(&a, &b), 0.0);
      }
    }

    #[test]
    fn ranking_is_positive_and_non_increasing(
      required in skill_set(),
      pools in prop::collection::vec(skill_set(), 0..10),
    ) {
      let users: Vec<User> = pools
        .iter()
        .enumerate()
        .map(|(i, s)| User { skills: s.clone(), ..user(&format!("u{i}"), "") })
        .collect();
      let ranked = rank_candidates(&Job { required_skills: required, ..job("") }, &users);
      prop_assert!(ranked.iter().all(|c| c.score > 0.0));
      prop_assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    }
  }
}
