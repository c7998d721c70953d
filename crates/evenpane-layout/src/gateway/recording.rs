//! A gateway that records mutations instead of performing them.
//!
//! Queries are answered either from fixed text or by a live gateway, which
//! makes the same type serve tests and `--dry-run`.

use evenpane_common::Orientation;
use tracing::info;

use super::{CommandGateway, Instruction, Result};
use crate::rebalance::Resize;

enum Source {
    Fixed { layout: String, active: u32 },
    Live(Box<dyn CommandGateway>),
}

pub struct RecordingGateway {
    source: Source,
    instructions: Vec<Instruction>,
}

impl RecordingGateway {
    /// Answer queries with `layout` and the active pane number `active`.
    ///
    /// The fixed text stands for the window as it looks after the recorded
    /// mutations.
    pub fn new(layout: impl Into<String>, active: u32) -> Self {
        Self {
            source: Source::Fixed {
                layout: layout.into(),
                active,
            },
            instructions: Vec::new(),
        }
    }

    /// Forward queries to `inner` and record every mutation.
    pub fn over(inner: Box<dyn CommandGateway>) -> Self {
        Self {
            source: Source::Live(inner),
            instructions: Vec::new(),
        }
    }

    /// Mutations recorded so far, in issue order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn into_instructions(self) -> Vec<Instruction> {
        self.instructions
    }
}

impl CommandGateway for RecordingGateway {
    fn query_layout(&mut self) -> Result<String> {
        match &mut self.source {
            Source::Fixed { layout, .. } => Ok(layout.clone()),
            Source::Live(inner) => inner.query_layout(),
        }
    }

    fn query_active_pane(&mut self) -> Result<u32> {
        match &mut self.source {
            Source::Fixed { active, .. } => Ok(*active),
            Source::Live(inner) => inner.query_active_pane(),
        }
    }

    fn split(&mut self, orientation: Orientation) -> Result<()> {
        info!(?orientation, "recording split");
        self.instructions.push(Instruction::Split { orientation });
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        info!("recording close");
        self.instructions.push(Instruction::Close);
        Ok(())
    }

    fn resize(&mut self, resize: &Resize) -> Result<()> {
        info!(pane = %resize.pane, dimensions = %resize.dimensions, "recording resize");
        self.instructions.push(Instruction::Resize(*resize));
        Ok(())
    }

    /// A live source never receives the recorded mutations.
    fn observes_mutations(&self) -> bool {
        matches!(self.source, Source::Fixed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use evenpane_common::{Dimensions, PaneId};

    struct Canned;

    impl CommandGateway for Canned {
        fn query_layout(&mut self) -> Result<String> {
            Ok("b25d,80x24,0,0,0".into())
        }
        fn query_active_pane(&mut self) -> Result<u32> {
            Ok(0)
        }
        fn split(&mut self, _orientation: Orientation) -> Result<()> {
            panic!("live split during dry run");
        }
        fn close(&mut self) -> Result<()> {
            panic!("live close during dry run");
        }
        fn resize(&mut self, _resize: &Resize) -> Result<()> {
            panic!("live resize during dry run");
        }
    }

    #[test]
    fn fixed_source_answers_queries() {
        let mut gw = RecordingGateway::new("80x24,0,0,4", 4);
        assert_eq!(gw.query_layout().unwrap(), "80x24,0,0,4");
        assert_eq!(gw.query_active_pane().unwrap(), 4);
        assert!(gw.observes_mutations());
        assert!(gw.instructions().is_empty());
    }

    #[test]
    fn records_mutations_in_order() {
        let mut gw = RecordingGateway::new("", 0);
        let resize = Resize {
            pane: PaneId(1),
            token: 1,
            dimensions: Dimensions::new(40, 24),
        };
        gw.split(Orientation::Row).unwrap();
        gw.resize(&resize).unwrap();
        gw.close().unwrap();
        assert_eq!(
            gw.into_instructions(),
            vec![
                Instruction::Split {
                    orientation: Orientation::Row
                },
                Instruction::Resize(resize),
                Instruction::Close,
            ]
        );
    }

    #[test]
    fn live_source_forwards_queries_only() {
        let mut gw = RecordingGateway::over(Box::new(Canned));
        assert_eq!(gw.query_layout().unwrap(), "b25d,80x24,0,0,0");
        assert!(!gw.observes_mutations());
        gw.close().unwrap();
        assert_eq!(gw.instructions(), &[Instruction::Close]);
    }

    #[test]
    fn instructions_serialize_with_op_tag() {
        let json = serde_json::to_string(&Instruction::Close).unwrap();
        assert_eq!(json, r#"{"op":"close"}"#);
        let json = serde_json::to_value(Instruction::Split {
            orientation: Orientation::Column,
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"op": "split", "orientation": "column"}));
    }
}
