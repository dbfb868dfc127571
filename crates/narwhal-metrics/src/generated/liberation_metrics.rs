// Embedded glyph metrics for the Liberation font families.
//
// Regenerate from the Liberation 2.x TTFs with:
//   cargo run -p xtask -- gen-font-metrics --fonts <dir>
//
// The rows below were not read from those files. Advances are the published
// Liberation Sans/Mono advance widths (metric-compatible with Arial and Courier New) on a
// 2048-unit em. Ink bounds are the metric-compatible Helvetica outline boxes rescaled to
// that em: Bold boxes follow the bold advances, Italic boxes are sheared by 12 degrees, and
// Mono boxes are fitted into the 1229-unit cell. Expect ink edges to differ from the real
// outlines by a few font units; whole strings recorded from the text backend are listed in
// `recorded_runs.rs` and take precedence.
//
// Each row is `(character, advance, ink bounds [x_min, y_min, x_max, y_max])`; whitespace has
// no ink.

pub(crate) const UNITS_PER_EM: u16 = 2048;

/// `.notdef` box drawn for characters missing from a face: `(advance, ink bounds)`.
pub(crate) const NOTDEF: (u16, [i16; 4]) = (1536, [256, 0, 1280, 1466]);
pub(crate) const MONO_NOTDEF: (u16, [i16; 4]) = (1229, [154, 0, 1075, 1466]);

pub(crate) static LIBERATION_SANS_REGULAR: &[(char, u16, Option<[i16; 4]>)] = &[
    (' ', 569, None),
    ('!', 569, Some([184, 0, 383, 1470])),
    ('"', 727, Some([143, 948, 584, 1470])),
    ('#', 1139, Some([57, 0, 1083, 1409])),
    ('$', 1139, Some([66, -236, 1065, 1587])),
    ('%', 1821, Some([80, -39, 1741, 1440])),
    ('&', 1366, Some([90, -31, 1321, 1470])),
    ('\'', 391, Some([121, 948, 270, 1470])),
    ('(', 682, Some([139, -424, 612, 1501])),
    (')', 682, Some([70, -424, 543, 1501])),
    ('*', 797, Some([80, 883, 715, 1470])),
    ('+', 1196, Some([80, 0, 1116, 1034])),
    (',', 569, Some([178, -301, 391, 217])),
    ('-', 682, Some([90, 475, 592, 659])),
    ('.', 569, Some([178, 0, 391, 217])),
    ('/', 569, Some([-35, -39, 604, 1509])),
    ('0', 1139, Some([76, -39, 1063, 1440])),
    ('1', 1139, Some([207, 0, 735, 1440])),
    ('2', 1139, Some([53, 0, 1038, 1440])),
    ('3', 1139, Some([70, -39, 1069, 1440])),
    ('4', 1139, Some([51, 0, 1071, 1440])),
    ('5', 1139, Some([66, -39, 1053, 1409])),
    ('6', 1139, Some([78, -39, 1061, 1440])),
    ('7', 1139, Some([76, 0, 1071, 1409])),
    ('8', 1139, Some([78, -39, 1059, 1440])),
    ('9', 1139, Some([86, -39, 1053, 1440])),
    (':', 569, Some([178, 0, 391, 1057])),
    (';', 569, Some([178, -301, 391, 1057])),
    ('<', 1196, Some([98, 23, 1098, 1014])),
    ('=', 1196, Some([80, 236, 1116, 799])),
    ('>', 1196, Some([98, 23, 1098, 1014])),
    ('?', 1139, Some([115, 0, 1008, 1489])),
    ('@', 2079, Some([301, -39, 1778, 1509])),
    ('A', 1366, Some([29, 0, 1339, 1470])),
    ('B', 1366, Some([152, 0, 1284, 1470])),
    ('C', 1479, Some([90, -39, 1395, 1509])),
    ('D', 1479, Some([166, 0, 1380, 1470])),
    ('E', 1366, Some([176, 0, 1262, 1470])),
    ('F', 1251, Some([176, 0, 1194, 1470])),
    ('G', 1593, Some([98, -39, 1442, 1509])),
    ('H', 1479, Some([158, 0, 1323, 1470])),
    ('I', 569, Some([186, 0, 385, 1470])),
    ('J', 1024, Some([35, -39, 877, 1470])),
    ('K', 1366, Some([156, 0, 1358, 1470])),
    ('L', 1139, Some([156, 0, 1100, 1470])),
    ('M', 1706, Some([150, 0, 1559, 1470])),
    ('N', 1479, Some([156, 0, 1323, 1470])),
    ('O', 1593, Some([80, -39, 1513, 1509])),
    ('P', 1366, Some([176, 0, 1274, 1470])),
    ('Q', 1593, Some([80, -115, 1513, 1509])),
    ('R', 1479, Some([180, 0, 1401, 1470])),
    ('S', 1366, Some([100, -39, 1270, 1509])),
    ('T', 1251, Some([29, 0, 1223, 1470])),
    ('U', 1479, Some([162, -39, 1319, 1470])),
    ('V', 1366, Some([41, 0, 1325, 1470])),
    ('W', 1933, Some([33, 0, 1901, 1470])),
    ('X', 1366, Some([39, 0, 1327, 1470])),
    ('Y', 1366, Some([29, 0, 1337, 1470])),
    ('Z', 1251, Some([47, 0, 1204, 1470])),
    ('[', 569, Some([129, -401, 512, 1479])),
    ('\\', 569, Some([-35, -39, 604, 1509])),
    (']', 569, Some([57, -401, 440, 1479])),
    ('^', 961, Some([-29, 541, 989, 1409])),
    ('_', 1139, Some([0, -256, 1139, -154])),
    ('`', 682, Some([29, 1214, 432, 1503])),
    ('a', 1139, Some([74, -31, 1085, 1102])),
    ('b', 1139, Some([119, -31, 1059, 1470])),
    ('c', 1024, Some([61, -31, 977, 1102])),
    ('d', 1139, Some([72, -31, 1022, 1470])),
    ('e', 1139, Some([82, -31, 1057, 1102])),
    ('f', 569, Some([29, 0, 537, 1491])),
    ('g', 1139, Some([82, -451, 1022, 1102])),
    ('h', 1139, Some([133, 0, 1006, 1470])),
    ('i', 455, Some([137, 0, 317, 1470])),
    ('j', 455, Some([-33, -430, 317, 1470])),
    ('k', 1024, Some([137, 0, 1026, 1470])),
    ('l', 455, Some([137, 0, 317, 1470])),
    ('m', 1706, Some([133, 0, 1575, 1102])),
    ('n', 1139, Some([133, 0, 1006, 1102])),
    ('o', 1139, Some([72, -29, 1067, 1102])),
    ('p', 1139, Some([119, -424, 1059, 1102])),
    ('q', 1139, Some([72, -424, 1012, 1102])),
    ('r', 682, Some([158, 0, 680, 1102])),
    ('s', 1024, Some([66, -31, 950, 1102])),
    ('t', 569, Some([29, -14, 526, 1370])),
    ('u', 1139, Some([139, -31, 1001, 1071])),
    ('v', 1024, Some([16, 0, 1008, 1071])),
    ('w', 1479, Some([29, 0, 1452, 1071])),
    ('x', 1024, Some([23, 0, 1004, 1071])),
    ('y', 1024, Some([23, -438, 1001, 1071])),
    ('z', 1024, Some([63, 0, 961, 1071])),
    ('{', 684, Some([86, -401, 598, 1479])),
    ('|', 532, Some([193, -461, 342, 1587])),
    ('}', 684, Some([86, -401, 598, 1479])),
    ('~', 1196, Some([125, 369, 1071, 668])),
];

pub(crate) static LIBERATION_SANS_BOLD: &[(char, u16, Option<[i16; 4]>)] = &[
    (' ', 569, None),
    ('!', 682, Some([206, 0, 473, 1479])),
    ('"', 971, Some([177, 948, 794, 1479])),
    ('#', 1139, Some([43, 0, 1098, 1417])),
    ('$', 1139, Some([51, -244, 1079, 1595])),
    ('%', 1821, Some([66, -47, 1755, 1448])),
    ('&', 1479, Some([83, -39, 1444, 1479])),
    ('\'', 487, Some([136, 948, 351, 1479])),
    ('(', 682, Some([125, -432, 627, 1509])),
    (')', 682, Some([55, -432, 557, 1509])),
    ('*', 797, Some([66, 883, 729, 1479])),
    ('+', 1196, Some([66, 0, 1130, 1034])),
    (',', 569, Some([164, -309, 406, 217])),
    ('-', 682, Some([76, 475, 606, 659])),
    ('.', 569, Some([164, 0, 406, 217])),
    ('/', 569, Some([-49, -47, 618, 1518])),
    ('0', 1139, Some([61, -47, 1077, 1448])),
    ('1', 1139, Some([193, 0, 750, 1448])),
    ('2', 1139, Some([39, 0, 1053, 1448])),
    ('3', 1139, Some([55, -47, 1083, 1448])),
    ('4', 1139, Some([37, 0, 1085, 1448])),
    ('5', 1139, Some([51, -47, 1067, 1417])),
    ('6', 1139, Some([63, -47, 1075, 1448])),
    ('7', 1139, Some([61, 0, 1085, 1417])),
    ('8', 1139, Some([63, -47, 1073, 1448])),
    ('9', 1139, Some([72, -47, 1067, 1448])),
    (':', 682, Some([199, 0, 483, 1057])),
    (';', 682, Some([199, -309, 483, 1057])),
    ('<', 1196, Some([84, 23, 1112, 1014])),
    ('=', 1196, Some([66, 236, 1130, 799])),
    ('>', 1196, Some([84, 23, 1112, 1014])),
    ('?', 1251, Some([112, 0, 1122, 1497])),
    ('@', 1997, Some([275, -47, 1722, 1518])),
    ('A', 1479, Some([17, 0, 1464, 1479])),
    ('B', 1479, Some([150, 0, 1404, 1479])),
    ('C', 1479, Some([76, -47, 1409, 1518])),
    ('D', 1479, Some([152, 0, 1395, 1479])),
    ('E', 1366, Some([162, 0, 1276, 1479])),
    ('F', 1251, Some([162, 0, 1208, 1479])),
    ('G', 1593, Some([84, -47, 1456, 1518])),
    ('H', 1479, Some([143, 0, 1337, 1479])),
    ('I', 569, Some([172, 0, 399, 1479])),
    ('J', 1139, Some([24, -47, 989, 1479])),
    ('K', 1479, Some([154, 0, 1484, 1479])),
    ('L', 1251, Some([157, 0, 1223, 1479])),
    ('M', 1706, Some([135, 0, 1573, 1479])),
    ('N', 1479, Some([141, 0, 1337, 1479])),
    ('O', 1593, Some([66, -47, 1528, 1518])),
    ('P', 1366, Some([162, 0, 1288, 1479])),
    ('Q', 1593, Some([66, -123, 1528, 1518])),
    ('R', 1479, Some([166, 0, 1415, 1479])),
    ('S', 1366, Some([86, -47, 1284, 1518])),
    ('T', 1251, Some([14, 0, 1237, 1479])),
    ('U', 1479, Some([147, -47, 1333, 1479])),
    ('V', 1366, Some([27, 0, 1339, 1479])),
    ('W', 1933, Some([18, 0, 1915, 1479])),
    ('X', 1366, Some([25, 0, 1341, 1479])),
    ('Y', 1366, Some([14, 0, 1352, 1479])),
    ('Z', 1251, Some([33, 0, 1219, 1479])),
    ('[', 682, Some([140, -410, 628, 1487])),
    ('\\', 569, Some([-49, -47, 618, 1518])),
    (']', 682, Some([54, -410, 542, 1487])),
    ('^', 1196, Some([-50, 541, 1246, 1417])),
    ('_', 1139, Some([-14, -264, 1153, -154])),
    ('`', 682, Some([14, 1214, 446, 1511])),
    ('a', 1139, Some([59, -39, 1100, 1102])),
    ('b', 1251, Some([116, -39, 1178, 1479])),
    ('c', 1139, Some([54, -39, 1101, 1102])),
    ('d', 1251, Some([64, -39, 1137, 1479])),
    ('e', 1139, Some([68, -39, 1071, 1102])),
    ('f', 682, Some([20, 0, 657, 1499])),
    ('g', 1251, Some([76, -459, 1137, 1102])),
    ('h', 1251, Some([132, 0, 1119, 1479])),
    ('i', 569, Some([157, 0, 412, 1479])),
    ('j', 569, Some([-55, -438, 412, 1479])),
    ('k', 1139, Some([138, 0, 1155, 1479])),
    ('l', 569, Some([157, 0, 412, 1479])),
    ('m', 1821, Some([128, 0, 1695, 1102])),
    ('n', 1251, Some([132, 0, 1119, 1102])),
    ('o', 1251, Some([64, -37, 1187, 1102])),
    ('p', 1251, Some([116, -432, 1178, 1102])),
    ('q', 1251, Some([64, -432, 1126, 1102])),
    ('r', 797, Some([170, 0, 809, 1102])),
    ('s', 1139, Some([59, -39, 1071, 1102])),
    ('t', 682, Some([20, -23, 645, 1378])),
    ('u', 1251, Some([139, -39, 1115, 1071])),
    ('v', 1139, Some([4, 0, 1135, 1071])),
    ('w', 1593, Some([17, 0, 1579, 1071])),
    ('x', 1139, Some([11, 0, 1130, 1071])),
    ('y', 1139, Some([11, -446, 1128, 1071])),
    ('z', 1024, Some([49, 0, 975, 1071])),
    ('{', 797, Some([86, -410, 711, 1487])),
    ('|', 573, Some([193, -469, 383, 1595])),
    ('}', 797, Some([86, -410, 711, 1487])),
    ('~', 1196, Some([111, 369, 1085, 668])),
];

pub(crate) static LIBERATION_SANS_ITALIC: &[(char, u16, Option<[i16; 4]>)] = &[
    (' ', 569, None),
    ('!', 569, Some([184, 0, 695, 1470])),
    ('"', 727, Some([345, 948, 896, 1470])),
    ('#', 1139, Some([57, 0, 1382, 1409])),
    ('$', 1139, Some([16, -236, 1402, 1587])),
    ('%', 1821, Some([72, -39, 2047, 1440])),
    ('&', 1366, Some([83, -31, 1633, 1470])),
    ('\'', 391, Some([323, 948, 582, 1470])),
    ('(', 682, Some([49, -424, 931, 1501])),
    (')', 682, Some([-20, -424, 862, 1501])),
    ('*', 797, Some([268, 883, 1027, 1470])),
    ('+', 1196, Some([80, 0, 1336, 1034])),
    (',', 569, Some([114, -301, 437, 217])),
    ('-', 682, Some([191, 475, 732, 659])),
    ('.', 569, Some([178, 0, 437, 217])),
    ('/', 569, Some([-43, -39, 925, 1509])),
    ('0', 1139, Some([68, -39, 1369, 1440])),
    ('1', 1139, Some([207, 0, 1041, 1440])),
    ('2', 1139, Some([53, 0, 1344, 1440])),
    ('3', 1139, Some([62, -39, 1375, 1440])),
    ('4', 1139, Some([51, 0, 1377, 1440])),
    ('5', 1139, Some([58, -39, 1352, 1409])),
    ('6', 1139, Some([70, -39, 1367, 1440])),
    ('7', 1139, Some([76, 0, 1370, 1409])),
    ('8', 1139, Some([70, -39, 1365, 1440])),
    ('9', 1139, Some([78, -39, 1359, 1440])),
    (':', 569, Some([178, 0, 616, 1057])),
    (';', 569, Some([114, -301, 616, 1057])),
    ('<', 1196, Some([103, 23, 1314, 1014])),
    ('=', 1196, Some([130, 236, 1286, 799])),
    ('>', 1196, Some([103, 23, 1314, 1014])),
    ('?', 1139, Some([115, 0, 1324, 1489])),
    ('@', 2079, Some([293, -39, 2099, 1509])),
    ('A', 1366, Some([29, 0, 1651, 1470])),
    ('B', 1366, Some([152, 0, 1596, 1470])),
    ('C', 1479, Some([82, -39, 1716, 1509])),
    ('D', 1479, Some([166, 0, 1692, 1470])),
    ('E', 1366, Some([176, 0, 1574, 1470])),
    ('F', 1251, Some([176, 0, 1506, 1470])),
    ('G', 1593, Some([90, -39, 1763, 1509])),
    ('H', 1479, Some([158, 0, 1635, 1470])),
    ('I', 569, Some([186, 0, 697, 1470])),
    ('J', 1024, Some([27, -39, 1189, 1470])),
    ('K', 1366, Some([156, 0, 1670, 1470])),
    ('L', 1139, Some([156, 0, 1412, 1470])),
    ('M', 1706, Some([150, 0, 1871, 1470])),
    ('N', 1479, Some([156, 0, 1635, 1470])),
    ('O', 1593, Some([72, -39, 1834, 1509])),
    ('P', 1366, Some([176, 0, 1586, 1470])),
    ('Q', 1593, Some([56, -115, 1834, 1509])),
    ('R', 1479, Some([180, 0, 1713, 1470])),
    ('S', 1366, Some([92, -39, 1591, 1509])),
    ('T', 1251, Some([29, 0, 1535, 1470])),
    ('U', 1479, Some([154, -39, 1631, 1470])),
    ('V', 1366, Some([41, 0, 1637, 1470])),
    ('W', 1933, Some([33, 0, 2213, 1470])),
    ('X', 1366, Some([39, 0, 1639, 1470])),
    ('Y', 1366, Some([29, 0, 1649, 1470])),
    ('Z', 1251, Some([47, 0, 1516, 1470])),
    ('[', 569, Some([44, -401, 826, 1479])),
    ('\\', 569, Some([-43, -39, 925, 1509])),
    (']', 569, Some([-28, -401, 754, 1479])),
    ('^', 961, Some([86, 541, 1288, 1409])),
    ('_', 1139, Some([-54, -256, 1106, -154])),
    ('`', 682, Some([287, 1214, 751, 1503])),
    ('a', 1139, Some([67, -31, 1319, 1102])),
    ('b', 1139, Some([112, -31, 1371, 1470])),
    ('c', 1024, Some([54, -31, 1211, 1102])),
    ('d', 1139, Some([65, -31, 1334, 1470])),
    ('e', 1139, Some([75, -31, 1291, 1102])),
    ('f', 569, Some([29, 0, 854, 1491])),
    ('g', 1139, Some([-14, -451, 1256, 1102])),
    ('h', 1139, Some([133, 0, 1318, 1470])),
    ('i', 455, Some([137, 0, 629, 1470])),
    ('j', 455, Some([-124, -430, 629, 1470])),
    ('k', 1024, Some([137, 0, 1338, 1470])),
    ('l', 455, Some([137, 0, 629, 1470])),
    ('m', 1706, Some([133, 0, 1809, 1102])),
    ('n', 1139, Some([133, 0, 1240, 1102])),
    ('o', 1139, Some([66, -29, 1301, 1102])),
    ('p', 1139, Some([29, -424, 1293, 1102])),
    ('q', 1139, Some([-18, -424, 1246, 1102])),
    ('r', 682, Some([158, 0, 914, 1102])),
    ('s', 1024, Some([59, -31, 1184, 1102])),
    ('t', 569, Some([26, -14, 817, 1370])),
    ('u', 1139, Some([132, -31, 1229, 1071])),
    ('v', 1024, Some([16, 0, 1236, 1071])),
    ('w', 1479, Some([29, 0, 1680, 1071])),
    ('x', 1024, Some([23, 0, 1232, 1071])),
    ('y', 1024, Some([-70, -438, 1229, 1071])),
    ('z', 1024, Some([63, 0, 1189, 1071])),
    ('{', 684, Some([1, -401, 912, 1479])),
    ('|', 532, Some([95, -461, 679, 1587])),
    ('}', 684, Some([1, -401, 912, 1479])),
    ('~', 1196, Some([203, 369, 1213, 668])),
];

pub(crate) static LIBERATION_MONO_REGULAR: &[(char, u16, Option<[i16; 4]>)] = &[
    (' ', 1229, None),
    ('!', 1229, Some([515, 0, 714, 1470])),
    ('"', 1229, Some([394, 948, 835, 1470])),
    ('#', 1229, Some([102, 0, 1128, 1409])),
    ('$', 1229, Some([115, -236, 1114, 1587])),
    ('%', 1229, Some([90, -39, 1139, 1440])),
    ('&', 1229, Some([90, -31, 1139, 1470])),
    ('\'', 1229, Some([540, 948, 689, 1470])),
    ('(', 1229, Some([378, -424, 851, 1501])),
    (')', 1229, Some([378, -424, 851, 1501])),
    ('*', 1229, Some([297, 883, 932, 1470])),
    ('+', 1229, Some([96, 0, 1132, 1034])),
    (',', 1229, Some([508, -301, 721, 217])),
    ('-', 1229, Some([364, 475, 866, 659])),
    ('.', 1229, Some([508, 0, 721, 217])),
    ('/', 1229, Some([295, -39, 934, 1509])),
    ('0', 1229, Some([121, -39, 1108, 1440])),
    ('1', 1229, Some([350, 0, 878, 1440])),
    ('2', 1229, Some([122, 0, 1107, 1440])),
    ('3', 1229, Some([115, -39, 1114, 1440])),
    ('4', 1229, Some([104, 0, 1124, 1440])),
    ('5', 1229, Some([121, -39, 1108, 1409])),
    ('6', 1229, Some([123, -39, 1106, 1440])),
    ('7', 1229, Some([117, 0, 1112, 1409])),
    ('8', 1229, Some([124, -39, 1105, 1440])),
    ('9', 1229, Some([131, -39, 1098, 1440])),
    (':', 1229, Some([508, 0, 721, 1057])),
    (';', 1229, Some([508, -301, 721, 1057])),
    ('<', 1229, Some([114, 23, 1114, 1014])),
    ('=', 1229, Some([96, 236, 1132, 799])),
    ('>', 1229, Some([114, 23, 1114, 1014])),
    ('?', 1229, Some([168, 0, 1061, 1489])),
    ('@', 1229, Some([90, -39, 1139, 1509])),
    ('A', 1229, Some([90, 0, 1139, 1470])),
    ('B', 1229, Some([90, 0, 1139, 1470])),
    ('C', 1229, Some([90, -39, 1139, 1509])),
    ('D', 1229, Some([90, 0, 1139, 1470])),
    ('E', 1229, Some([90, 0, 1139, 1470])),
    ('F', 1229, Some([106, 0, 1124, 1470])),
    ('G', 1229, Some([90, -39, 1139, 1509])),
    ('H', 1229, Some([90, 0, 1139, 1470])),
    ('I', 1229, Some([404, 0, 824, 1470])),
    ('J', 1229, Some([194, -39, 1036, 1470])),
    ('K', 1229, Some([90, 0, 1139, 1470])),
    ('L', 1229, Some([142, 0, 1086, 1470])),
    ('M', 1229, Some([90, 0, 1139, 1470])),
    ('N', 1229, Some([90, 0, 1139, 1470])),
    ('O', 1229, Some([90, -39, 1139, 1509])),
    ('P', 1229, Some([90, 0, 1139, 1470])),
    ('Q', 1229, Some([90, -115, 1139, 1509])),
    ('R', 1229, Some([90, 0, 1139, 1470])),
    ('S', 1229, Some([90, -39, 1139, 1509])),
    ('T', 1229, Some([90, 0, 1139, 1470])),
    ('U', 1229, Some([90, -39, 1139, 1470])),
    ('V', 1229, Some([90, 0, 1139, 1470])),
    ('W', 1229, Some([90, 0, 1139, 1470])),
    ('X', 1229, Some([90, 0, 1139, 1470])),
    ('Y', 1229, Some([90, 0, 1139, 1470])),
    ('Z', 1229, Some([90, 0, 1139, 1470])),
    ('[', 1229, Some([423, -401, 806, 1479])),
    ('\\', 1229, Some([295, -39, 934, 1509])),
    (']', 1229, Some([423, -401, 806, 1479])),
    ('^', 1229, Some([106, 541, 1124, 1409])),
    ('_', 1229, Some([90, -256, 1139, -154])),
    ('`', 1229, Some([413, 1214, 816, 1503])),
    ('a', 1229, Some([109, -31, 1120, 1102])),
    ('b', 1229, Some([144, -31, 1084, 1470])),
    ('c', 1229, Some([156, -31, 1072, 1102])),
    ('d', 1229, Some([140, -31, 1090, 1470])),
    ('e', 1229, Some([127, -31, 1102, 1102])),
    ('f', 1229, Some([360, 0, 868, 1491])),
    ('g', 1229, Some([144, -451, 1084, 1102])),
    ('h', 1229, Some([178, 0, 1051, 1470])),
    ('i', 1229, Some([404, 0, 824, 1470])),
    ('j', 1229, Some([404, -430, 824, 1470])),
    ('k', 1229, Some([170, 0, 1059, 1470])),
    ('l', 1229, Some([404, 0, 824, 1470])),
    ('m', 1229, Some([90, 0, 1139, 1102])),
    ('n', 1229, Some([178, 0, 1051, 1102])),
    ('o', 1229, Some([117, -29, 1112, 1102])),
    ('p', 1229, Some([144, -424, 1084, 1102])),
    ('q', 1229, Some([144, -424, 1084, 1102])),
    ('r', 1229, Some([354, 0, 876, 1102])),
    ('s', 1229, Some([172, -31, 1056, 1102])),
    ('t', 1229, Some([366, -14, 863, 1370])),
    ('u', 1229, Some([184, -31, 1046, 1071])),
    ('v', 1229, Some([118, 0, 1110, 1071])),
    ('w', 1229, Some([90, 0, 1139, 1071])),
    ('x', 1229, Some([124, 0, 1105, 1071])),
    ('y', 1229, Some([126, -438, 1104, 1071])),
    ('z', 1229, Some([166, 0, 1064, 1071])),
    ('{', 1229, Some([358, -401, 870, 1479])),
    ('|', 1229, Some([540, -461, 689, 1587])),
    ('}', 1229, Some([358, -401, 870, 1479])),
    ('~', 1229, Some([142, 369, 1088, 668])),
];
