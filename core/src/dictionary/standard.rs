//! The built-in attribute dictionary.
//!
//! The table covers the File Meta Information group (0002), the DICOMDIR
//! group (0004), the general study/series information group (0008), and
//! the patient, acquisition, positioning and image description attributes
//! that grayscale imaging files commonly carry. A linear table would do at
//! this size; an index by tag is built lazily on first use, as attribute
//! lookups happen once per parsed element.

use super::{DataDictionary, DictionaryEntry};
use crate::header::{Tag, VR};
use once_cell::sync::Lazy;
use std::collections::HashMap;

type E = DictionaryEntry;

static INDEX: Lazy<HashMap<Tag, &'static DictionaryEntry>> =
    Lazy::new(|| ENTRIES.iter().map(|e| (e.tag, e)).collect());

/// The built-in attribute dictionary.
///
/// This unit type holds no state; the underlying registry is built
/// lazily on first lookup and shared by all instances.
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardDataDictionary;

impl DataDictionary for StandardDataDictionary {
    fn by_tag(&self, tag: Tag) -> Option<&DictionaryEntry> {
        INDEX.get(&tag).copied()
    }
}

/// The dictionary rows, ordered by tag.
pub const ENTRIES: &[E] = &[
    E { tag: Tag(0x0002, 0x0000), vr: VR::UL, description: "File Meta Elements Group Len" },
    E { tag: Tag(0x0002, 0x0001), vr: VR::OB, description: "File Meta Information Version" },
    E { tag: Tag(0x0002, 0x0002), vr: VR::UI, description: "Media Storage SOP Class UID" },
    E { tag: Tag(0x0002, 0x0003), vr: VR::UI, description: "Media Storage SOP Inst UID" },
    E { tag: Tag(0x0002, 0x0010), vr: VR::UI, description: "Transfer Syntax UID" },
    E { tag: Tag(0x0002, 0x0012), vr: VR::UI, description: "Implementation Class UID" },
    E { tag: Tag(0x0002, 0x0013), vr: VR::SH, description: "Implementation Version Name" },
    E { tag: Tag(0x0002, 0x0016), vr: VR::AE, description: "Source Application Entity Title" },
    E { tag: Tag(0x0002, 0x0017), vr: VR::AE, description: "Sending Application Entity Title" },
    E { tag: Tag(0x0002, 0x0018), vr: VR::AE, description: "Receiving Application Entity Title" },
    E { tag: Tag(0x0002, 0x0100), vr: VR::UI, description: "Private Information Creator UID" },
    E { tag: Tag(0x0002, 0x0102), vr: VR::OB, description: "Private Information" },

    E { tag: Tag(0x0004, 0x1130), vr: VR::CS, description: "File-set ID" },
    E { tag: Tag(0x0004, 0x1141), vr: VR::CS, description: "File-set Descriptor File ID" },
    E { tag: Tag(0x0004, 0x1142), vr: VR::CS, description: "Specific Character Set of File-set Descriptor File" },
    E { tag: Tag(0x0004, 0x1200), vr: VR::UL, description: "Offset of the First Directory Record of the Root Directory Entity" },
    E { tag: Tag(0x0004, 0x1202), vr: VR::UL, description: "Offset of the Last Directory Record of the Root Directory Entity" },
    E { tag: Tag(0x0004, 0x1212), vr: VR::US, description: "File-set Consistency Flag" },
    E { tag: Tag(0x0004, 0x1220), vr: VR::SQ, description: "Directory Record Sequence" },
    E { tag: Tag(0x0004, 0x1400), vr: VR::UL, description: "Offset of the Next Directory Record" },
    E { tag: Tag(0x0004, 0x1410), vr: VR::US, description: "Record In-use Flag" },
    E { tag: Tag(0x0004, 0x1420), vr: VR::UL, description: "Offset of Referenced Lower-Level Directory Entity" },
    E { tag: Tag(0x0004, 0x1430), vr: VR::CS, description: "Directory Record Type" },
    E { tag: Tag(0x0004, 0x1432), vr: VR::UI, description: "Private Record UID" },
    E { tag: Tag(0x0004, 0x1500), vr: VR::CS, description: "Referenced File ID" },
    E { tag: Tag(0x0004, 0x1504), vr: VR::UL, description: "MRDR Directory Record Offset" },
    E { tag: Tag(0x0004, 0x1510), vr: VR::UI, description: "Referenced SOP Class UID in File" },
    E { tag: Tag(0x0004, 0x1511), vr: VR::UI, description: "Referenced SOP Instance UID in File" },
    E { tag: Tag(0x0004, 0x1512), vr: VR::UI, description: "Referenced Transfer Syntax UID in File" },
    E { tag: Tag(0x0004, 0x151A), vr: VR::UI, description: "Referenced Related General SOP Class UID in File" },
    E { tag: Tag(0x0004, 0x1600), vr: VR::UL, description: "Number of References" },

    E { tag: Tag(0x0008, 0x0001), vr: VR::UL, description: "Length to End" },
    E { tag: Tag(0x0008, 0x0005), vr: VR::CS, description: "Specific Character Set" },
    E { tag: Tag(0x0008, 0x0006), vr: VR::SQ, description: "Language Code Sequence" },
    E { tag: Tag(0x0008, 0x0008), vr: VR::CS, description: "Image Type" },
    E { tag: Tag(0x0008, 0x0010), vr: VR::SH, description: "Recognition Code" },
    E { tag: Tag(0x0008, 0x0012), vr: VR::DA, description: "Instance Creation Date" },
    E { tag: Tag(0x0008, 0x0013), vr: VR::TM, description: "Instance Creation Time" },
    E { tag: Tag(0x0008, 0x0014), vr: VR::UI, description: "Instance Creator UID" },
    E { tag: Tag(0x0008, 0x0015), vr: VR::DT, description: "Instance Create UID" },
    E { tag: Tag(0x0008, 0x0016), vr: VR::UI, description: "SOP Class UID" },
    E { tag: Tag(0x0008, 0x0018), vr: VR::UI, description: "SOP Instance UID" },
    E { tag: Tag(0x0008, 0x001A), vr: VR::UI, description: "Related General SOP Class UID" },
    E { tag: Tag(0x0008, 0x001B), vr: VR::UI, description: "Original Specialized SOP Class UID" },
    E { tag: Tag(0x0008, 0x0020), vr: VR::DA, description: "Study Date" },
    E { tag: Tag(0x0008, 0x0021), vr: VR::DA, description: "Series Date" },
    E { tag: Tag(0x0008, 0x0022), vr: VR::DA, description: "Acquisition Date" },
    E { tag: Tag(0x0008, 0x0023), vr: VR::DA, description: "Content Date" },
    E { tag: Tag(0x0008, 0x0024), vr: VR::DA, description: "Overlay Date" },
    E { tag: Tag(0x0008, 0x0025), vr: VR::DA, description: "Curve Date" },
    E { tag: Tag(0x0008, 0x002A), vr: VR::DT, description: "Acquisition DateTime" },
    E { tag: Tag(0x0008, 0x0030), vr: VR::TM, description: "Study Time" },
    E { tag: Tag(0x0008, 0x0031), vr: VR::TM, description: "Series Time" },
    E { tag: Tag(0x0008, 0x0032), vr: VR::TM, description: "Acquisition Time" },
    E { tag: Tag(0x0008, 0x0033), vr: VR::TM, description: "Content Time" },
    E { tag: Tag(0x0008, 0x0034), vr: VR::TM, description: "Overlay Time" },
    E { tag: Tag(0x0008, 0x0035), vr: VR::TM, description: "Curve Time" },
    E { tag: Tag(0x0008, 0x0040), vr: VR::US, description: "Data Set Type" },
    E { tag: Tag(0x0008, 0x0041), vr: VR::LO, description: "Data Set Subtype" },
    E { tag: Tag(0x0008, 0x0042), vr: VR::CS, description: "Nuclear Medicine Series Type" },
    E { tag: Tag(0x0008, 0x0050), vr: VR::SH, description: "Accession Number" },
    E { tag: Tag(0x0008, 0x0051), vr: VR::SQ, description: "Issuer of Accession Number Sequence" },
    E { tag: Tag(0x0008, 0x0052), vr: VR::CS, description: "Query/Retrieve Level" },
    E { tag: Tag(0x0008, 0x0053), vr: VR::CS, description: "Query/Retrieve View" },
    E { tag: Tag(0x0008, 0x0054), vr: VR::AE, description: "Retrieve AE Title" },
    E { tag: Tag(0x0008, 0x0055), vr: VR::AE, description: "Station AE Title" },
    E { tag: Tag(0x0008, 0x0056), vr: VR::CS, description: "Instance Availability" },
    E { tag: Tag(0x0008, 0x0058), vr: VR::UI, description: "Failed SOP Instance UID List" },
    E { tag: Tag(0x0008, 0x0060), vr: VR::CS, description: "Modality" },
    E { tag: Tag(0x0008, 0x0061), vr: VR::CS, description: "Modalities in Study" },
    E { tag: Tag(0x0008, 0x0062), vr: VR::UI, description: "SOP Classes in Study" },
    E { tag: Tag(0x0008, 0x0064), vr: VR::CS, description: "Conversion Type" },
    E { tag: Tag(0x0008, 0x0068), vr: VR::CS, description: "Presentation Intent Type" },
    E { tag: Tag(0x0008, 0x0070), vr: VR::LO, description: "Manufacturer" },
    E { tag: Tag(0x0008, 0x0080), vr: VR::LO, description: "Institution Name" },
    E { tag: Tag(0x0008, 0x0081), vr: VR::ST, description: "Institution Address" },
    E { tag: Tag(0x0008, 0x0082), vr: VR::SQ, description: "Institution Code Sequence" },
    E { tag: Tag(0x0008, 0x0090), vr: VR::PN, description: "Referring Physician's Name" },
    E { tag: Tag(0x0008, 0x0092), vr: VR::ST, description: "Referring Physician's Address" },
    E { tag: Tag(0x0008, 0x0094), vr: VR::SH, description: "Referring Physician's Telephone Numbers" },
    E { tag: Tag(0x0008, 0x0096), vr: VR::SQ, description: "Referring Physician Identification Sequence" },
    E { tag: Tag(0x0008, 0x009C), vr: VR::PN, description: "Consulting Physician's Name" },
    E { tag: Tag(0x0008, 0x009D), vr: VR::SQ, description: "Consulting Physician Identification Sequence" },
    E { tag: Tag(0x0008, 0x0100), vr: VR::SH, description: "Code Value" },
    E { tag: Tag(0x0008, 0x0101), vr: VR::LO, description: "Extended Code Value" },
    E { tag: Tag(0x0008, 0x0102), vr: VR::SH, description: "Coding Scheme Designator" },
    E { tag: Tag(0x0008, 0x0104), vr: VR::LO, description: "Code Meaning" },
    E { tag: Tag(0x0008, 0x0105), vr: VR::CS, description: "Mapping Resource" },
    E { tag: Tag(0x0008, 0x0106), vr: VR::DT, description: "Context Group Version" },
    E { tag: Tag(0x0008, 0x0107), vr: VR::DT, description: "Context Group Local Version" },
    E { tag: Tag(0x0008, 0x0108), vr: VR::LT, description: "Extended Code Meaning" },
    E { tag: Tag(0x0008, 0x010C), vr: VR::UI, description: "Coding Scheme UID" },
    E { tag: Tag(0x0008, 0x010D), vr: VR::UI, description: "Context Group Extension Creator UID" },
    E { tag: Tag(0x0008, 0x010F), vr: VR::CS, description: "Context Identifier" },
    E { tag: Tag(0x0008, 0x0110), vr: VR::SQ, description: "Coding Scheme Identification Sequence" },
    E { tag: Tag(0x0008, 0x0112), vr: VR::LO, description: "Coding Scheme Registry" },
    E { tag: Tag(0x0008, 0x0114), vr: VR::ST, description: "Coding Scheme External ID" },
    E { tag: Tag(0x0008, 0x0115), vr: VR::ST, description: "Coding Scheme Name" },
    E { tag: Tag(0x0008, 0x0116), vr: VR::ST, description: "Coding Scheme Responsible Organization" },
    E { tag: Tag(0x0008, 0x0117), vr: VR::UI, description: "Context UID" },
    E { tag: Tag(0x0008, 0x0118), vr: VR::UI, description: "Mapping Resource UID" },
    E { tag: Tag(0x0008, 0x0119), vr: VR::UC, description: "Long Code Value" },
    E { tag: Tag(0x0008, 0x0120), vr: VR::UR, description: "URN Code Value" },
    E { tag: Tag(0x0008, 0x0121), vr: VR::SQ, description: "Equivalent Code Sequence" },
    E { tag: Tag(0x0008, 0x0122), vr: VR::LO, description: "Mapping Resource Name" },
    E { tag: Tag(0x0008, 0x0123), vr: VR::SQ, description: "Context Group Identification Sequence" },
    E { tag: Tag(0x0008, 0x0124), vr: VR::SQ, description: "Mapping Resource Identification Sequence" },
    E { tag: Tag(0x0008, 0x0201), vr: VR::SH, description: "Timezone Offset From UTC" },
    E { tag: Tag(0x0008, 0x0300), vr: VR::SQ, description: "Private Data Element Characteristics Sequence" },
    E { tag: Tag(0x0008, 0x0301), vr: VR::US, description: "Private Group Reference" },
    E { tag: Tag(0x0008, 0x0302), vr: VR::LO, description: "Private Creator Reference" },
    E { tag: Tag(0x0008, 0x0303), vr: VR::CS, description: "Block Identifying Information Status" },
    E { tag: Tag(0x0008, 0x0304), vr: VR::US, description: "Nonidentifying PrivateElements" },
    E { tag: Tag(0x0008, 0x0305), vr: VR::SQ, description: "Deidentification ActionSequence" },
    E { tag: Tag(0x0008, 0x0306), vr: VR::US, description: "Identifying PrivateElements" },
    E { tag: Tag(0x0008, 0x0307), vr: VR::CS, description: "Deidentification Action" },
    E { tag: Tag(0x0008, 0x1000), vr: VR::AE, description: "Network ID" },
    E { tag: Tag(0x0008, 0x1010), vr: VR::SH, description: "Station Name" },
    E { tag: Tag(0x0008, 0x1030), vr: VR::LO, description: "Study Description" },
    E { tag: Tag(0x0008, 0x1032), vr: VR::SQ, description: "Procedure Code Sequence" },
    E { tag: Tag(0x0008, 0x103E), vr: VR::LO, description: "Series Description" },
    E { tag: Tag(0x0008, 0x103F), vr: VR::SQ, description: "Series Description CodeSequence" },
    E { tag: Tag(0x0008, 0x1040), vr: VR::LO, description: "Institutional Department Name" },
    E { tag: Tag(0x0008, 0x1048), vr: VR::PN, description: "Physician(s) of Record" },
    E { tag: Tag(0x0008, 0x1049), vr: VR::SQ, description: "Physician(s) of Record Identification Sequence" },
    E { tag: Tag(0x0008, 0x1050), vr: VR::PN, description: "Attending Physician's Name" },
    E { tag: Tag(0x0008, 0x1052), vr: VR::SQ, description: "Performing Physician Identification Sequence" },
    E { tag: Tag(0x0008, 0x1060), vr: VR::PN, description: "Name of Physician(s) Reading Study" },
    E { tag: Tag(0x0008, 0x1062), vr: VR::SQ, description: "Physician(s) ReadingStudy Identification Sequenc" },
    E { tag: Tag(0x0008, 0x1070), vr: VR::PN, description: "Operator's Name" },
    E { tag: Tag(0x0008, 0x1072), vr: VR::SQ, description: "Operator Identification Sequence" },
    E { tag: Tag(0x0008, 0x1080), vr: VR::LO, description: "Admitting Diagnosis Description" },
    E { tag: Tag(0x0008, 0x1084), vr: VR::SQ, description: "Admitting Diagnosis Code Sequence" },
    E { tag: Tag(0x0008, 0x1090), vr: VR::LO, description: "Manufacturer's Model Name" },
    E { tag: Tag(0x0008, 0x1100), vr: VR::SQ, description: "Referenced Results Sequence" },
    E { tag: Tag(0x0008, 0x1110), vr: VR::SQ, description: "Referenced Study Sequence" },
    E { tag: Tag(0x0008, 0x1111), vr: VR::SQ, description: "Referenced Study Component Sequence" },
    E { tag: Tag(0x0008, 0x1115), vr: VR::SQ, description: "Referenced Series Sequence" },
    E { tag: Tag(0x0008, 0x1120), vr: VR::SQ, description: "Referenced Patient Sequence" },
    E { tag: Tag(0x0008, 0x1125), vr: VR::SQ, description: "Referenced Visit Sequence" },
    E { tag: Tag(0x0008, 0x1130), vr: VR::SQ, description: "Referenced Overlay Sequence" },
    E { tag: Tag(0x0008, 0x1134), vr: VR::SQ, description: "Referenced Stereometric Instance Sequence" },
    E { tag: Tag(0x0008, 0x113A), vr: VR::SQ, description: "Referenced Waveform Sequence" },
    E { tag: Tag(0x0008, 0x1140), vr: VR::SQ, description: "Referenced Image Sequence" },
    E { tag: Tag(0x0008, 0x1145), vr: VR::SQ, description: "Referenced Curve Sequence" },
    E { tag: Tag(0x0008, 0x114A), vr: VR::SQ, description: "Referenced InstanceSequence" },
    E { tag: Tag(0x0008, 0x114B), vr: VR::SQ, description: "Referenced Real World Value Mapping InstanceSequence" },
    E { tag: Tag(0x0008, 0x1150), vr: VR::UI, description: "Referenced SOP Class UID" },
    E { tag: Tag(0x0008, 0x1155), vr: VR::UI, description: "Referenced SOP Instance UID" },
    E { tag: Tag(0x0008, 0x115A), vr: VR::UI, description: "SOP Classes Supported" },
    E { tag: Tag(0x0008, 0x1160), vr: VR::IS, description: "Referenced Frame Number" },
    E { tag: Tag(0x0008, 0x1161), vr: VR::UL, description: "Simple Frame List" },
    E { tag: Tag(0x0008, 0x1162), vr: VR::UL, description: "Calculated Frame List" },
    E { tag: Tag(0x0008, 0x1163), vr: VR::FD, description: "Time Range" },
    E { tag: Tag(0x0008, 0x1164), vr: VR::SQ, description: "Frame Extraction Sequence" },
    E { tag: Tag(0x0008, 0x1167), vr: VR::UI, description: "Multi-frame Source SOP Instance UID" },
    E { tag: Tag(0x0008, 0x1190), vr: VR::UR, description: "Retrieve URL" },
    E { tag: Tag(0x0008, 0x1195), vr: VR::UI, description: "Transaction UID" },
    E { tag: Tag(0x0008, 0x1196), vr: VR::US, description: "Warning Reason" },
    E { tag: Tag(0x0008, 0x1197), vr: VR::US, description: "Failure Reason" },
    E { tag: Tag(0x0008, 0x1198), vr: VR::SQ, description: "Failed SOP Sequence" },
    E { tag: Tag(0x0008, 0x1199), vr: VR::SQ, description: "Referenced SOP Sequence" },
    E { tag: Tag(0x0008, 0x119A), vr: VR::SQ, description: "Other Failures Sequence" },
    E { tag: Tag(0x0008, 0x1200), vr: VR::SQ, description: "Studies Containing OtherReferenced InstancesSequence" },
    E { tag: Tag(0x0008, 0x1250), vr: VR::SQ, description: "Related Series Sequence" },
    E { tag: Tag(0x0008, 0x2110), vr: VR::CS, description: "Lossy Image Compression(Retired)" },
    E { tag: Tag(0x0008, 0x2111), vr: VR::ST, description: "Derivation Description" },
    E { tag: Tag(0x0008, 0x2112), vr: VR::SQ, description: "Source Image Sequence" },
    E { tag: Tag(0x0008, 0x2120), vr: VR::SH, description: "Stage Name" },
    E { tag: Tag(0x0008, 0x2122), vr: VR::IS, description: "Stage Number" },
    E { tag: Tag(0x0008, 0x2124), vr: VR::IS, description: "Number of Stages" },
    E { tag: Tag(0x0008, 0x2127), vr: VR::SH, description: "View Name" },
    E { tag: Tag(0x0008, 0x2128), vr: VR::IS, description: "View Number" },
    E { tag: Tag(0x0008, 0x2129), vr: VR::IS, description: "Number of Event Timers" },
    E { tag: Tag(0x0008, 0x212A), vr: VR::IS, description: "Number of Views in Stage" },
    E { tag: Tag(0x0008, 0x2130), vr: VR::DS, description: "Event Elapsed Time(s)" },
    E { tag: Tag(0x0008, 0x2132), vr: VR::LO, description: "Event Timer Name(s)" },
    E { tag: Tag(0x0008, 0x2133), vr: VR::SQ, description: "Event Timer Sequence" },
    E { tag: Tag(0x0008, 0x2134), vr: VR::FD, description: "Event Time Offset" },
    E { tag: Tag(0x0008, 0x2135), vr: VR::SQ, description: "Event Code Sequence" },
    E { tag: Tag(0x0008, 0x2142), vr: VR::IS, description: "Start Trim" },
    E { tag: Tag(0x0008, 0x2143), vr: VR::IS, description: "Stop Trim" },
    E { tag: Tag(0x0008, 0x2144), vr: VR::IS, description: "Recommended Display Frame Rate" },
    E { tag: Tag(0x0008, 0x2200), vr: VR::CS, description: "Transducer Position" },
    E { tag: Tag(0x0008, 0x2204), vr: VR::CS, description: "Transducer Orientation" },
    E { tag: Tag(0x0008, 0x2208), vr: VR::CS, description: "Anatomic Structure" },
    E { tag: Tag(0x0008, 0x2218), vr: VR::SQ, description: "Anatomic RegionSequence" },
    E { tag: Tag(0x0008, 0x2220), vr: VR::SQ, description: "Anatomic Region ModifierSequence" },
    E { tag: Tag(0x0008, 0x2228), vr: VR::SQ, description: "Primary Anatomic Structure Sequence" },
    E { tag: Tag(0x0008, 0x2229), vr: VR::SQ, description: "Anatomic Structure, Spaceor Region Sequence" },
    E { tag: Tag(0x0008, 0x2230), vr: VR::SQ, description: "Primary Anatomic Structure ModifierSequence" },
    E { tag: Tag(0x0008, 0x2240), vr: VR::SQ, description: "Transducer Position Sequence" },
    E { tag: Tag(0x0008, 0x2242), vr: VR::SQ, description: "Transducer Position Modifier Sequence" },
    E { tag: Tag(0x0008, 0x2244), vr: VR::SQ, description: "Transducer Orientation Sequence" },
    E { tag: Tag(0x0008, 0x2246), vr: VR::SQ, description: "Transducer Orientation Modifier Sequence" },
    E { tag: Tag(0x0008, 0x2251), vr: VR::SQ, description: "Anatomic Structure SpaceOr Region Code Sequence(Trial)" },
    E { tag: Tag(0x0008, 0x2253), vr: VR::SQ, description: "Anatomic Portal Of Entrance Code Sequence(Trial)" },
    E { tag: Tag(0x0008, 0x2255), vr: VR::SQ, description: "Anatomic ApproachDirection Code Sequence(Trial)" },
    E { tag: Tag(0x0008, 0x2256), vr: VR::ST, description: "Anatomic Perspective Description (Trial)" },
    E { tag: Tag(0x0008, 0x2257), vr: VR::SQ, description: "Anatomic Perspective Code Sequence (Trial)" },
    E { tag: Tag(0x0008, 0x2258), vr: VR::ST, description: "Anatomic Location Of Examining InstrumentDescription (Trial)" },
    E { tag: Tag(0x0008, 0x2259), vr: VR::SQ, description: "Anatomic Location Of Examining InstrumentCode Sequence (Trial)" },
    E { tag: Tag(0x0008, 0x225A), vr: VR::SQ, description: "Anatomic Structure SpaceOr Region Modifier CodeSequence (Trial)" },
    E { tag: Tag(0x0008, 0x225C), vr: VR::SQ, description: "On Axis Background Anatomic Structure CodeSequence (Trial)" },
    E { tag: Tag(0x0008, 0x3001), vr: VR::SQ, description: "Alternate Representation Sequence" },
    E { tag: Tag(0x0008, 0x3010), vr: VR::UI, description: "Irradiation Event UID" },
    E { tag: Tag(0x0008, 0x3011), vr: VR::SQ, description: "Source Irradiation Event Sequence" },
    E { tag: Tag(0x0008, 0x2012), vr: VR::UI, description: "Radiopharmaceutical Administration Event UID" },
    E { tag: Tag(0x0008, 0x4000), vr: VR::LT, description: "Identifying Comments" },
    E { tag: Tag(0x0008, 0x9007), vr: VR::CS, description: "Frame Type" },
    E { tag: Tag(0x0008, 0x9092), vr: VR::SQ, description: "Referenced ImageEvidence Sequence" },
    E { tag: Tag(0x0008, 0x9121), vr: VR::SQ, description: "Referenced Raw DataSequence" },
    E { tag: Tag(0x0008, 0x9123), vr: VR::UI, description: "Creator-Version UID" },
    E { tag: Tag(0x0008, 0x9124), vr: VR::SQ, description: "Derivation ImageSequence" },
    E { tag: Tag(0x0008, 0x9154), vr: VR::SQ, description: "Source Image EvidenceSequence" },
    E { tag: Tag(0x0008, 0x9205), vr: VR::CS, description: "Pixel Presentation" },
    E { tag: Tag(0x0008, 0x9206), vr: VR::CS, description: "Volumetric Properties" },
    E { tag: Tag(0x0008, 0x9207), vr: VR::CS, description: "Volume Based Calculation Technique" },
    E { tag: Tag(0x0008, 0x9208), vr: VR::CS, description: "Complex Image Component" },
    E { tag: Tag(0x0008, 0x9209), vr: VR::CS, description: "Acquisition Contrast" },
    E { tag: Tag(0x0008, 0x9215), vr: VR::SQ, description: "Derivation Code Sequence" },
    E { tag: Tag(0x0008, 0x9237), vr: VR::SQ, description: "Referenced Presentation State Sequence" },
    E { tag: Tag(0x0008, 0x9410), vr: VR::SQ, description: "Referenced Other Plane Sequence" },
    E { tag: Tag(0x0008, 0x9458), vr: VR::SQ, description: "Frame Display Sequence" },
    E { tag: Tag(0x0008, 0x9459), vr: VR::FL, description: "Recommended DisplayFrame Rate in Float" },
    E { tag: Tag(0x0008, 0x9460), vr: VR::CS, description: "Skip Frame Range Flag" },

    E { tag: Tag(0x0010, 0x0010), vr: VR::PN, description: "Patient's Name" },
    E { tag: Tag(0x0010, 0x0020), vr: VR::LO, description: "Patient ID" },
    E { tag: Tag(0x0010, 0x0021), vr: VR::LO, description: "Issuer of Patient ID" },
    E { tag: Tag(0x0010, 0x0030), vr: VR::DA, description: "Patient's Birth Date" },
    E { tag: Tag(0x0010, 0x0032), vr: VR::TM, description: "Patient's Birth Time" },
    E { tag: Tag(0x0010, 0x0040), vr: VR::CS, description: "Patient's Sex" },
    E { tag: Tag(0x0010, 0x1000), vr: VR::LO, description: "Other Patient IDs" },
    E { tag: Tag(0x0010, 0x1001), vr: VR::PN, description: "Other Patient Names" },
    E { tag: Tag(0x0010, 0x1010), vr: VR::AS, description: "Patient's Age" },
    E { tag: Tag(0x0010, 0x1020), vr: VR::DS, description: "Patient's Size" },
    E { tag: Tag(0x0010, 0x1030), vr: VR::DS, description: "Patient's Weight" },
    E { tag: Tag(0x0010, 0x2160), vr: VR::SH, description: "Ethnic Group" },
    E { tag: Tag(0x0010, 0x21B0), vr: VR::LT, description: "Additional Patient History" },
    E { tag: Tag(0x0010, 0x4000), vr: VR::LT, description: "Patient Comments" },

    E { tag: Tag(0x0018, 0x0015), vr: VR::CS, description: "Body Part Examined" },
    E { tag: Tag(0x0018, 0x0050), vr: VR::DS, description: "Slice Thickness" },
    E { tag: Tag(0x0018, 0x0060), vr: VR::DS, description: "KVP" },
    E { tag: Tag(0x0018, 0x0088), vr: VR::DS, description: "Spacing Between Slices" },
    E { tag: Tag(0x0018, 0x1020), vr: VR::LO, description: "Software Versions" },
    E { tag: Tag(0x0018, 0x1030), vr: VR::LO, description: "Protocol Name" },
    E { tag: Tag(0x0018, 0x1063), vr: VR::DS, description: "Frame Time" },
    E { tag: Tag(0x0018, 0x1065), vr: VR::DS, description: "Frame Time Vector" },
    E { tag: Tag(0x0018, 0x1151), vr: VR::IS, description: "X-Ray Tube Current" },
    E { tag: Tag(0x0018, 0x1152), vr: VR::IS, description: "Exposure" },
    E { tag: Tag(0x0018, 0x5100), vr: VR::CS, description: "Patient Position" },

    E { tag: Tag(0x0020, 0x000D), vr: VR::UI, description: "Study Instance UID" },
    E { tag: Tag(0x0020, 0x000E), vr: VR::UI, description: "Series Instance UID" },
    E { tag: Tag(0x0020, 0x0010), vr: VR::SH, description: "Study ID" },
    E { tag: Tag(0x0020, 0x0011), vr: VR::IS, description: "Series Number" },
    E { tag: Tag(0x0020, 0x0012), vr: VR::IS, description: "Acquisition Number" },
    E { tag: Tag(0x0020, 0x0013), vr: VR::IS, description: "Instance Number" },
    E { tag: Tag(0x0020, 0x0020), vr: VR::CS, description: "Patient Orientation" },
    E { tag: Tag(0x0020, 0x0032), vr: VR::DS, description: "Image Position (Patient)" },
    E { tag: Tag(0x0020, 0x0037), vr: VR::DS, description: "Image Orientation (Patient)" },
    E { tag: Tag(0x0020, 0x0052), vr: VR::UI, description: "Frame of Reference UID" },
    E { tag: Tag(0x0020, 0x1041), vr: VR::DS, description: "Slice Location" },
    E { tag: Tag(0x0020, 0x4000), vr: VR::LT, description: "Image Comments" },

    E { tag: Tag(0x0028, 0x0002), vr: VR::US, description: "Samples per Pixel" },
    E { tag: Tag(0x0028, 0x0004), vr: VR::CS, description: "Photometric Interpretation" },
    E { tag: Tag(0x0028, 0x0008), vr: VR::IS, description: "Number of Frames" },
    E { tag: Tag(0x0028, 0x0010), vr: VR::US, description: "Rows" },
    E { tag: Tag(0x0028, 0x0011), vr: VR::US, description: "Columns" },
    E { tag: Tag(0x0028, 0x0030), vr: VR::DS, description: "Pixel Spacing" },
    E { tag: Tag(0x0028, 0x0100), vr: VR::US, description: "Bits Allocated" },
    E { tag: Tag(0x0028, 0x0101), vr: VR::US, description: "Bits Stored" },
    E { tag: Tag(0x0028, 0x0102), vr: VR::US, description: "High Bit" },
    E { tag: Tag(0x0028, 0x0103), vr: VR::US, description: "Pixel Representation" },
    E { tag: Tag(0x0028, 0x0120), vr: VR::US, description: "Pixel Padding Value" },
    E { tag: Tag(0x0028, 0x1050), vr: VR::DS, description: "Window Center" },
    E { tag: Tag(0x0028, 0x1051), vr: VR::DS, description: "Window Width" },
    E { tag: Tag(0x0028, 0x1052), vr: VR::DS, description: "Rescale Intercept" },
    E { tag: Tag(0x0028, 0x1053), vr: VR::DS, description: "Rescale Slope" },
    E { tag: Tag(0x0028, 0x1054), vr: VR::LO, description: "Rescale Type" },
    E { tag: Tag(0x0028, 0x2110), vr: VR::CS, description: "Lossy Image Compression" },

    E { tag: Tag(0x7FE0, 0x0010), vr: VR::OW, description: "Pixel Data" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_attributes() {
        let dict = StandardDataDictionary;

        let entry = dict.by_tag(Tag(0x0002, 0x0010)).expect("a known attribute");
        assert_eq!(entry.vr, VR::UI);
        assert_eq!(entry.description, "Transfer Syntax UID");

        let entry = dict.by_tag(Tag(0x0008, 0x0060)).expect("a known attribute");
        assert_eq!(entry.vr, VR::CS);
        assert_eq!(entry.description, "Modality");

        let entry = dict.by_tag(Tag(0x0028, 0x0010)).expect("a known attribute");
        assert_eq!(entry.vr, VR::US);
        assert_eq!(entry.description, "Rows");

        let entry = dict.by_tag(Tag(0x7FE0, 0x0010)).expect("a known attribute");
        assert_eq!(entry.vr, VR::OW);
    }

    #[test]
    fn unknown_attributes_miss() {
        let dict = StandardDataDictionary;
        assert!(dict.by_tag(Tag(0x0009, 0x0001)).is_none());
        assert!(dict.by_tag(Tag(0xFFFE, 0xE000)).is_none());
    }

    #[test]
    fn entries_have_unique_tags() {
        let mut seen = std::collections::HashSet::new();
        for e in ENTRIES {
            assert!(seen.insert(e.tag), "duplicate dictionary tag {}", e.tag);
        }
    }
}
