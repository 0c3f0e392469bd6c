use serde::Serialize;

use mips_rs::{Listing, RenderConfig};

#[derive(Debug, Clone, Serialize)]
pub struct LabelOut {
    /// Instruction index the label marks.
    pub index: usize,
    /// Byte address, `index * 4`.
    pub address: u32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub source: String,
    pub instructions: usize,
    pub labels: Vec<LabelOut>,
    pub lines: Vec<String>,
}

impl Report {
    pub fn new(source: impl Into<String>, listing: &Listing, cfg: &RenderConfig) -> Self {
        // Listing::labels yields ascending index order
        let labels: Vec<LabelOut> = listing
            .labels()
            .map(|(index, name)| LabelOut { index, address: (index as u32).wrapping_mul(4), name: name.to_string() })
            .collect();
        Self {
            source: source.into(),
            instructions: listing.instruction_count(),
            labels,
            lines: listing.render(cfg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mips_rs::disassemble_bin;

    #[test]
    fn report_lists_labels_in_address_order() {
        // beq $t0, $t1, +1 ; add ; add
        let prog = [
            "00010001000010010000000000000001",
            "00000001000010010101000000100000",
            "00000001000010010101000000100000",
        ];
        let listing = disassemble_bin(&prog).unwrap();
        let report = Report::new("prog.obj", &listing, &RenderConfig::default());
        assert_eq!(report.instructions, 3);
        assert_eq!(report.labels.len(), 1);
        assert_eq!(report.labels[0].index, 2);
        assert_eq!(report.labels[0].address, 8);
        assert_eq!(report.labels[0].name, "Addr_0008");

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["lines"][2], "Addr_0008:");
        assert_eq!(json["source"], "prog.obj");
    }

    #[test]
    fn report_orders_several_labels_by_index() {
        // add ; bne -> 0 ; beq -> 4 ; add
        let prog = [
            "00000001000010010101000000100000",
            "00010101000010011111111111111110",
            "00010001000010010000000000000001",
            "00000001000010010101000000100000",
        ];
        let listing = disassemble_bin(&prog).unwrap();
        let report = Report::new("prog.obj", &listing, &RenderConfig::default());
        let names: Vec<&str> = report.labels.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Addr_0000", "Addr_0010"]);
        assert_eq!(report.labels[1].address, 16);
    }
}
