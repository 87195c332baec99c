//! Built-in portfolio entries.
//!
//! To add a project, copy one record below and edit its fields. Keep 3–4
//! bullets focused on impact and tools. The trailing `[New Project]` entries
//! are placeholders, one per category.

use crate::model::project::{Category, ProjectRecord};

/// Returns the built-in records in display order.
pub fn builtin_records() -> Vec<ProjectRecord> {
    vec![
        // Robotics & Automation
        ProjectRecord::new(
            "Automatic Storage & Retrieval System (ASRS)",
            "KLE Tech / Beckhoff TwinCAT",
            "2021–2022",
            Category::RoboticsAutomation,
        )
        .with_tags(["Beckhoff", "TwinCAT", "OPC UA", "Digital Twin"])
        .with_bullets([
            "Built an industrial-scale ASRS with Beckhoff PLCs and VFD motors in TwinCAT.",
            "Created a MATLAB digital twin via OPC UA to optimize retrieval times.",
            "Integrated browser-based HMI for live control/monitoring; reduced simulated latency by ~30%.",
        ])
        .with_link("GitHub Profile", "https://github.com/Prathyush-9"),
        ProjectRecord::new(
            "3‑DOF SCARA Manipulator (300g payload)",
            "KLE Tech / ROS & Gazebo",
            "2021",
            Category::RoboticsAutomation,
        )
        .with_tags(["SCARA", "ROS", "Gazebo", "Kinematics"])
        .with_bullets([
            "Designed & simulated a pick‑and‑place arm in ROS/Gazebo with suction end‑effector.",
            "Prototyped the physical arm achieving reliable 300g handling and precise motion control.",
            "Performed FEA in SolidWorks to verify strength/durability; documented IP protection checks.",
        ])
        .with_link("GitHub Profile", "https://github.com/Prathyush-9"),
        ProjectRecord::new(
            "Hexapod Robot – Bio‑inspired Gaits",
            "University of Delaware",
            "2024",
            Category::RoboticsAutomation,
        )
        .with_tags(["Hexapod", "MATLAB", "Gait Planning", "Arduino"])
        .with_bullets([
            "Developed tripod and rotational gait algorithms; simulated servo angles in MATLAB.",
            "Integrated 18 servos on Arduino Mega; validated smooth walking and precise on‑spot rotation.",
            "Reduced drift/lag via timing synchronization and control refinements.",
        ]),
        ProjectRecord::new(
            "Microrobotics – Magnetic Control",
            "UD Microrobotics Lab",
            "2024",
            Category::RoboticsAutomation,
        )
        .with_tags(["Python", "Helmholtz Coils", "Magnetic Control"])
        .with_bullets([
            "Implemented Python control to actuate microrobots with a 3D Helmholtz coil system.",
            "Built SolidWorks fixtures and maintained incubation environment for repeatable trials.",
            "Logged experiments and protocols for traceability and contamination control.",
        ]),
        // Perception
        ProjectRecord::new(
            "AMR with LiDAR & ROS Navigation",
            "Difacto Technologies",
            "2022",
            Category::Perception,
        )
        .with_tags(["AMR", "LiDAR", "SLAM", "ROS"])
        .with_bullets([
            "Built ROS pipeline for localization/mapping with LiDAR SLAM.",
            "Fused LiDAR + odometry for obstacle avoidance and path planning.",
            "Validated navigation robustness across dynamic aisle layouts.",
        ]),
        ProjectRecord::new(
            "AGV – Magnetic Tape Guidance",
            "Difacto Technologies",
            "2022",
            Category::Perception,
        )
        .with_tags(["AGV", "PID", "Sensors"])
        .with_bullets([
            "Implemented PID tuning for robust tape‑based tracking under load changes.",
            "Integrated sensors for obstacle detection and feedback control.",
            "Analyzed logs to minimize lateral error and improve stability.",
        ]),
        ProjectRecord::new(
            "Quality Control of Rexroth Beams",
            "Industry Project",
            "2021–2022",
            Category::Perception,
        )
        .with_tags(["OpenCV", "Deep Learning", "Inspection"])
        .with_bullets([
            "Built automated inspection for detection, dimension checks, and fracture identification.",
            "Designed mechanical rig; fabricated parts via CNC & 3D printing.",
            "Reduced manual inspection dependency; improved measurement consistency.",
        ]),
        ProjectRecord::new(
            "Lens Localization & Pick‑Place (DOBOT)",
            "Asemtica Robotics",
            "2019",
            Category::Perception,
        )
        .with_tags(["OpenCV", "6‑DOF", "Calibration"])
        .with_bullets([
            "Localized lenses (pose/position) and mapped camera to robot coordinates.",
            "Automated pick‑place on a 6‑DOF DOBOT using calibrated transforms.",
            "Closed the loop from perception to reliable manipulation.",
        ]),
        // AI & ML
        ProjectRecord::new(
            "Energy Consumption Forecasting (LSTM)",
            "UD Coursework",
            "2024",
            Category::AiMl,
        )
        .with_tags(["LSTM", "Time Series", "XGBoost"])
        .with_bullets([
            "Built models (LR, DT, RF, XGBoost, LSTM) on 19k+ time‑series samples.",
            "Achieved SOTA in class: R² ≈ 0.955, RMSE ≈ 0.037 after tuning & CV.",
            "Identified temperature/humidity/time as key features for demand.",
        ])
        .with_link("GitHub Profile", "https://github.com/Prathyush-9"),
        ProjectRecord::new(
            "Water Potability Classification",
            "UD Coursework",
            "2024",
            Category::AiMl,
        )
        .with_tags(["Classification", "Random Forest", "GUI"])
        .with_bullets([
            "Pipeline with imputation, outlier handling, scaling, and class balancing.",
            "Benchmarked LR, SVM, RF, XGBoost, NN; RF reached ~68% accuracy.",
            "Built a Tkinter GUI for real‑time prediction with feature importance.",
        ]),
        ProjectRecord::new(
            "Symptom‑to‑Disease Identification",
            "Personal",
            "2023",
            Category::AiMl,
        )
        .with_tags(["Healthcare AI", "Decision Trees"])
        .with_bullets([
            "Prototyped interpretable models mapping symptoms to conditions.",
            "Focused on calibration and threshold selection for safer usage.",
            "Outlined risk mitigations for false positives/negatives.",
        ]),
        ProjectRecord::new(
            "CV Toolkit: Lane / Pose / Tracking + Pick Mapping",
            "Asemtica / Personal",
            "2019–2023",
            Category::AiMl,
        )
        .with_tags(["OpenCV", "ROS", "Object Tracking"])
        .with_bullets([
            "Implemented lane detection, pose estimation, object tracking pipelines.",
            "Mapped image coordinates to robot frames for pick‑place tasks.",
            "Integrated real‑time vision nodes within ROS.",
        ]),
        // Embedded Systems
        ProjectRecord::new(
            "Bot‑to‑Bot Mesh Communication",
            "Jaia Robotics",
            "2024–2025",
            Category::EmbeddedSystems,
        )
        .with_tags(["Goby3", "XBee", "Mesh Networking"])
        .with_bullets([
            "Designed a mesh‑style comms system supporting broadcast and P2P for ASVs.",
            "Configured XBee radios on embedded platforms for reliable packet exchange.",
            "Delivered PoC enabling swarm cooperation in navigation/decision‑making.",
        ]),
        ProjectRecord::new(
            "Custom PCB for Signal Identification",
            "Lab Project",
            "2022",
            Category::EmbeddedSystems,
        )
        .with_tags(["PCB", "Signal Processing", "Oscilloscope"])
        .with_bullets([
            "Fabricated PCB for signal conditioning/recognition with oscilloscope validation.",
            "Integrated with motor control stack for deterministic actuation.",
            "Improved noise immunity through layout and filtering tweaks.",
        ]),
        ProjectRecord::new(
            "Schmitt Trigger Circuit",
            "Lab Project",
            "2022",
            Category::EmbeddedSystems,
        )
        .with_tags(["Analog", "Hysteresis", "Noise Immunity"])
        .with_bullets([
            "Built and characterized Schmitt trigger for clean digital transitions.",
            "Boosted reliability of sensor reads under electrical noise.",
            "Documented thresholds/timing for reuse in robotics I/O.",
        ]),
        ProjectRecord::new(
            "Fire‑Fighting Robot (with Ladder)",
            "Competition/Personal",
            "2021",
            Category::EmbeddedSystems,
        )
        .with_tags(["Sensors", "Actuators", "Mechanisms"])
        .with_bullets([
            "Detected flame sources and actuated extinguisher; designed access mechanism.",
            "Closed‑loop approach control; validated in obstacle scenarios.",
            "Demonstrated reliable suppression in bench tests.",
        ]),
        ProjectRecord::new(
            "Fastest Line Follower",
            "Competition/Personal",
            "2021",
            Category::EmbeddedSystems,
        )
        .with_tags(["PID", "IR Sensors", "uC"])
        .with_bullets([
            "High‑speed PID control with tuned sampling and actuation loops.",
            "Consistent lap times across varied tracks; robust cornering.",
            "Optimized ISR design for timing determinism.",
        ]),
        // Placeholders
        ProjectRecord::new(
            "[New Project]",
            "",
            "2025",
            Category::RoboticsAutomation,
        )
        .with_tags(["tag1", "tag2"])
        .with_bullets([
            "Impact (metric or outcome).",
            "Key tools/algorithms.",
            "Validation approach.",
        ]),
        ProjectRecord::new(
            "[New Project]",
            "",
            "2025",
            Category::Perception,
        )
        .with_tags(["tag1", "tag2"])
        .with_bullets([
            "Impact (metric or outcome).",
            "Key tools/algorithms.",
            "Validation approach.",
        ]),
        ProjectRecord::new(
            "[New Project]",
            "",
            "2025",
            Category::AiMl,
        )
        .with_tags(["tag1", "tag2"])
        .with_bullets([
            "Impact (metric or outcome).",
            "Key tools/algorithms.",
            "Validation approach.",
        ]),
        ProjectRecord::new(
            "[New Project]",
            "",
            "2025",
            Category::EmbeddedSystems,
        )
        .with_tags(["tag1", "tag2"])
        .with_bullets([
            "Impact (metric or outcome).",
            "Key tools/algorithms.",
            "Validation approach.",
        ]),
    ]
}
