//! Chain of Responsibility: a claim travels through every handler in the order
//! the chain was wired.

use std::cell::RefCell;
use std::io::Write;
use std::rc::Rc;

use tracing::debug;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq)]
pub struct Claim {
    pub patient_name: String,
    pub amount: f64,
}

impl Claim {
    pub fn new(patient_name: impl Into<String>, amount: f64) -> Self {
        Self {
            patient_name: patient_name.into(),
            amount,
        }
    }
}

// ============================================================================
// Roles
// ============================================================================

pub trait ClaimProcessor {
    fn role(&self) -> &str;

    fn process(&self, claim: &Claim, out: &mut dyn Write) -> Result<()> {
        writeln!(
            out,
            "{} is processing the claim for {}",
            self.role(),
            claim.patient_name
        )?;
        Ok(())
    }
}

pub struct Receptionist;

impl ClaimProcessor for Receptionist {
    fn role(&self) -> &str {
        "Receptionist"
    }
}

pub struct Nurse;

impl ClaimProcessor for Nurse {
    fn role(&self) -> &str {
        "Nurse"
    }
}

pub struct Doctor;

impl ClaimProcessor for Doctor {
    fn role(&self) -> &str {
        "Doctor"
    }
}

pub struct InsuranceOfficer;

impl ClaimProcessor for InsuranceOfficer {
    fn role(&self) -> &str {
        "Insurance Officer"
    }
}

// ============================================================================
// Before: every role is called by hand
// ============================================================================

pub mod naive {
    use super::*;

    pub fn process_individually(claim: &Claim, out: &mut dyn Write) -> Result<()> {
        Receptionist.process(claim, out)?;
        Nurse.process(claim, out)?;
        Doctor.process(claim, out)?;
        InsuranceOfficer.process(claim, out)?;
        Ok(())
    }
}

// ============================================================================
// After: linked handlers
// ============================================================================

pub struct Handler {
    processor: Box<dyn ClaimProcessor>,
    next: RefCell<Option<Rc<Handler>>>,
}

impl Handler {
    pub fn new(processor: impl ClaimProcessor + 'static) -> Rc<Self> {
        Rc::new(Self {
            processor: Box::new(processor),
            next: RefCell::new(None),
        })
    }

    pub fn role(&self) -> &str {
        self.processor.role()
    }

    /// Links `next` after this handler and hands it back, so wiring reads
    /// `a.set_next(b).set_next(c)`.
    pub fn set_next(&self, next: Rc<Handler>) -> Rc<Handler> {
        *self.next.borrow_mut() = Some(Rc::clone(&next));
        next
    }

    /// Runs this handler's own step, then passes the claim along.
    pub fn handle(&self, claim: &Claim, out: &mut dyn Write) -> Result<()> {
        self.processor.process(claim, out)?;

        let next = self.next.borrow().clone();
        match next {
            Some(next) => {
                debug!(from = self.role(), to = next.role(), "forwarding claim");
                next.handle(claim, out)
            }
            None => Ok(()),
        }
    }
}

/// Receptionist -> Nurse -> Doctor -> Insurance Officer.
pub fn claim_chain() -> Rc<Handler> {
    let receptionist = Handler::new(Receptionist);
    receptionist
        .set_next(Handler::new(Nurse))
        .set_next(Handler::new(Doctor))
        .set_next(Handler::new(InsuranceOfficer));
    receptionist
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn lines(buf: Vec<u8>) -> Vec<String> {
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    struct Counting {
        name: &'static str,
        calls: Rc<Cell<usize>>,
    }

    impl ClaimProcessor for Counting {
        fn role(&self) -> &str {
            self.name
        }

        fn process(&self, _claim: &Claim, _out: &mut dyn Write) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            Ok(())
        }
    }

    #[test]
    fn test_full_chain_runs_in_attachment_order() {
        let claim = Claim::new("Marcos", 5000.0);
        let mut out = Vec::new();
        claim_chain().handle(&claim, &mut out).unwrap();

        assert_eq!(
            lines(out),
            vec![
                "Receptionist is processing the claim for Marcos",
                "Nurse is processing the claim for Marcos",
                "Doctor is processing the claim for Marcos",
                "Insurance Officer is processing the claim for Marcos",
            ]
        );
    }

    #[test]
    fn test_single_handler_ends_silently() {
        let claim = Claim::new("Ana", 10.0);
        let mut out = Vec::new();
        Handler::new(Nurse).handle(&claim, &mut out).unwrap();

        assert_eq!(lines(out), vec!["Nurse is processing the claim for Ana"]);
    }

    #[test]
    fn test_construction_order_defines_traversal() {
        let claim = Claim::new("Ana", 10.0);
        let head = Handler::new(InsuranceOfficer);
        head.set_next(Handler::new(Receptionist));

        let mut out = Vec::new();
        head.handle(&claim, &mut out).unwrap();

        let out = lines(out);
        assert!(out[0].starts_with("Insurance Officer"));
        assert!(out[1].starts_with("Receptionist"));
    }

    #[test]
    fn test_set_next_returns_argument() {
        let head = Handler::new(Receptionist);
        let nurse = Handler::new(Nurse);
        let returned = head.set_next(Rc::clone(&nurse));
        assert!(Rc::ptr_eq(&returned, &nurse));
    }

    #[test]
    fn test_each_handler_acts_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let counting = |name| Counting {
            name,
            calls: Rc::clone(&calls),
        };

        let head = Handler::new(counting("a"));
        head.set_next(Handler::new(counting("b")))
            .set_next(Handler::new(counting("c")));

        head.handle(&Claim::new("Ana", 1.0), &mut Vec::new()).unwrap();
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn test_naive_matches_chain_output() {
        let claim = Claim::new("Marcos", 5000.0);
        let mut chained = Vec::new();
        let mut by_hand = Vec::new();

        claim_chain().handle(&claim, &mut chained).unwrap();
        naive::process_individually(&claim, &mut by_hand).unwrap();

        assert_eq!(chained, by_hand);
    }
}
