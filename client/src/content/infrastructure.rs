//! Factory floor: machines and the production process.

use crate::content::company::Highlight;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MachineSpec {
    pub label: &'static str,
    pub value: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Machine {
    pub name: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub specs: [MachineSpec; 3],
}

impl Machine {
    /// Two-digit unit number shown on the machine card, 1-based.
    #[must_use]
    pub fn unit_label(index: usize) -> String {
        format!("UNIT {:02}", index + 1)
    }
}

const fn spec(label: &'static str, value: &'static str) -> MachineSpec {
    MachineSpec { label, value }
}

pub const FACILITY_AREA: &str = "10,000 sq.ft";

pub const MACHINES: [Machine; 7] = [
    Machine {
        name: "Lamination Machine",
        description: "Thermal precision finishing system for high-gloss and soft-touch velvet laminations.",
        image: "https://images.unsplash.com/photo-1581091226825-a6a2a5aee158?auto=format&fit=crop&q=80&w=1200",
        specs: [spec("Speed", "45m/min"), spec("Pressure", "120kg/cm²"), spec("Temperature", "110°C")],
    },
    Machine {
        name: "Foiling Machine",
        description: "Precision hot-stamping technology for luxury metallic foil application on premium cardstock.",
        image: "https://images.unsplash.com/photo-1504917595217-d4dc5ebe6122?auto=format&fit=crop&q=80&w=1200",
        specs: [spec("Force", "60 Tons"), spec("Format", "520x720mm"), spec("Accuracy", "0.01mm")],
    },
    Machine {
        name: "Fully Automated Foiling Machine",
        description: "Robotic high-speed foil integration with automated feeding and registration for mass production.",
        image: "https://images.unsplash.com/photo-1617333565851-f404981d39b8?auto=format&fit=crop&q=80&w=1200",
        specs: [spec("Cycle", "2500 sheets/hr"), spec("Sensors", "Optic-HD"), spec("Power", "15kW")],
    },
    Machine {
        name: "Punching Machine",
        description: "Heavy-duty hydraulic die-cutting system for intricate hangtag shapes and structural packaging.",
        image: "https://images.unsplash.com/photo-1565610222536-ef125c59da2e?auto=format&fit=crop&q=80&w=1200",
        specs: [spec("Pressure", "150 Tons"), spec("Stroke", "80mm"), spec("Tooling", "CNC-Bespoke")],
    },
    Machine {
        name: "Rotary Label Printing Machine",
        description: "Multi-color high-speed textile printing for care labels and neck tapes with ink-curing technology.",
        image: "https://images.unsplash.com/photo-1563089145-599997674d42?auto=format&fit=crop&q=80&w=1200",
        specs: [spec("Colors", "8 Stations"), spec("Web Width", "320mm"), spec("Curing", "UV/IR Dual")],
    },
    Machine {
        name: "Paper Cutting Machine",
        description: "Computerized guillotine with air-cushioned table for micron-accurate stock preparation.",
        image: "https://images.unsplash.com/photo-1516937941344-00b4e0337589?auto=format&fit=crop&q=80&w=1200",
        specs: [spec("Length", "1150mm"), spec("Precision", "±0.05mm"), spec("Control", "PLC-Touch")],
    },
    Machine {
        name: "Woven Label Machine",
        description: "Advanced high-density looms for intricate brand identity weaving with soft-edge ultrasonic cutting.",
        image: "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?auto=format&fit=crop&q=80&w=1200",
        specs: [spec("Loom", "Rapier-HD"), spec("Picks", "120/cm"), spec("Width", "200mm Max")],
    },
];

pub const PROCESS_STEPS: [Highlight; 4] = [
    Highlight { title: "Concept", description: "Creative design & digital sampling." },
    Highlight { title: "Design", description: "Technical specifications & material selection." },
    Highlight { title: "Manufacturing", description: "High-speed automated production lines." },
    Highlight { title: "Delivery", description: "Rigorous QC & worldwide export shipping." },
];
